//! Custom attributes attached to type definitions.
//!
//! Custom attributes carry the interop metadata the JNI naming rules depend on:
//! registration attributes (`[Register]`, `[JniTypeSignature]`) mark types bound to an
//! existing Java class, and attributes implementing `IJniNameProviderAttribute` override
//! the derived Java name.
//!
//! # Examples
//!
//! ```rust
//! use jnitypemap::metadata::customattributes::CustomAttribute;
//!
//! let register = CustomAttribute::new("Android.Runtime.RegisterAttribute")
//!     .with_fixed_arg("System.String", "android/app/Activity")
//!     .with_named_arg("DoNotGenerateAcw", "System.Boolean", true);
//!
//! assert_eq!(register.named_arg("DoNotGenerateAcw").map(|a| a.is_field), Some(false));
//! assert_eq!(
//!     register.first_fixed_arg().and_then(|a| a.value.as_str()),
//!     Some("android/app/Activity")
//! );
//! ```

mod types;

pub use types::*;

use crate::metadata::typesystem::TypeReference;

impl CustomAttribute {
    /// Create an attribute without arguments
    ///
    /// ## Arguments
    /// * 'attribute_type' - Reference to the attribute's type
    pub fn new(attribute_type: impl Into<TypeReference>) -> Self {
        CustomAttribute {
            attribute_type: attribute_type.into(),
            fixed_args: Vec::new(),
            named_args: Vec::new(),
        }
    }

    /// Append a positional (constructor) argument
    ///
    /// ## Arguments
    /// * 'arg_type' - Declared type of the constructor parameter
    /// * 'value'    - Argument value
    #[must_use]
    pub fn with_fixed_arg(
        mut self,
        arg_type: &str,
        value: impl Into<CustomAttributeArgument>,
    ) -> Self {
        self.fixed_args.push(CustomAttributeFixedArgument {
            arg_type: arg_type.to_string(),
            value: value.into(),
        });
        self
    }

    /// Append a named field argument
    ///
    /// ## Arguments
    /// * 'name'     - Field name
    /// * 'arg_type' - Declared type of the field
    /// * 'value'    - Argument value
    #[must_use]
    pub fn with_named_field(
        mut self,
        name: &str,
        arg_type: &str,
        value: impl Into<CustomAttributeArgument>,
    ) -> Self {
        self.named_args.push(CustomAttributeNamedArgument {
            is_field: true,
            name: name.to_string(),
            arg_type: arg_type.to_string(),
            value: value.into(),
        });
        self
    }

    /// Append a named property argument
    ///
    /// ## Arguments
    /// * 'name'     - Property name
    /// * 'arg_type' - Declared type of the property
    /// * 'value'    - Argument value
    #[must_use]
    pub fn with_named_arg(
        mut self,
        name: &str,
        arg_type: &str,
        value: impl Into<CustomAttributeArgument>,
    ) -> Self {
        self.named_args.push(CustomAttributeNamedArgument {
            is_field: false,
            name: name.to_string(),
            arg_type: arg_type.to_string(),
            value: value.into(),
        });
        self
    }

    /// The first named argument (field or property) with the given name
    #[must_use]
    pub fn named_arg(&self, name: &str) -> Option<&CustomAttributeNamedArgument> {
        self.named_args.iter().find(|arg| arg.name == name)
    }

    /// The first named property argument with the given name; fields are skipped
    #[must_use]
    pub fn named_property(&self, name: &str) -> Option<&CustomAttributeNamedArgument> {
        self.named_args
            .iter()
            .find(|arg| !arg.is_field && arg.name == name)
    }

    /// The first positional argument, if the constructor takes any
    #[must_use]
    pub fn first_fixed_arg(&self) -> Option<&CustomAttributeFixedArgument> {
        self.fixed_args.first()
    }
}
