//! Domain layer: naming convention rules and resolution outcomes.
//!
//! Everything in here is pure. Nothing touches the filesystem, so the rules
//! can be tested without building directory trees.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`naming`]: View/ViewModel naming convention and target derivation
//! - [`resolution`]: The two-valued outcome of a resolve and its miss reasons
//!
//! # Examples
//!
//! ```
//! use mvvm_counterpart::domain::{NamingConvention, Role};
//!
//! let convention = NamingConvention::default();
//! let target = convention.derive_target("CustomerView.xaml").unwrap();
//! assert_eq!(target.role, Role::View);
//! assert_eq!(target.expected_base_name, "CustomerViewModel");
//! assert_eq!(target.expected_extension, ".cs");
//! ```

pub mod error;
pub mod naming;
pub mod resolution;

pub use error::{CounterpartError, Result};
pub use naming::{ActiveFile, NamingConvention, Role, SearchTarget};
pub use resolution::{MissReason, Resolution};
