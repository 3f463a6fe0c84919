//! Typemap configuration
//!
//! This module provides the options that influence how JNI names are derived and how a
//! typemap is built. The defaults reproduce the naming used by the platform tooling:
//! `Mono.Android` keeps its namespaces as Java packages, every other assembly gets a
//! CRC-64 hashed package.

use strum::{Display, EnumIter, EnumString};

/// Assembly whose namespaces are used verbatim (lowercased) as Java package names
pub const DEFAULT_PLATFORM_ASSEMBLY: &str = "Mono.Android";

/// How Java package names are derived for types outside the platform binding assembly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum PackageNamingPolicy {
    /// `crc64` + CRC-64 of `namespace:assembly`
    #[default]
    #[strum(to_string = "crc64", serialize = "lowercase-crc64")]
    LowercaseCrc64,
    /// The namespace, lowercased
    Lowercase,
    /// `assembly_` + the assembly name (dots as underscores) + `.` + the namespace, lowercased
    LowercaseWithAssemblyName,
    /// `md5` + MD5 of `namespace:assembly`
    #[strum(to_string = "md5", serialize = "lowercase-md5")]
    LowercaseMd5,
}

/// Configuration for JNI name derivation and typemap building
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMapConfig {
    /// Assembly whose namespaces are used directly as Java packages
    pub platform_assembly: String,

    /// Package naming policy for all other assemblies
    pub package_naming: PackageNamingPolicy,

    /// Name types of different modules on worker threads
    /// Results are merged in module order, so the typemap is identical to a sequential build
    pub parallel: bool,
}

impl Default for TypeMapConfig {
    fn default() -> Self {
        Self {
            platform_assembly: DEFAULT_PLATFORM_ASSEMBLY.to_string(),
            package_naming: PackageNamingPolicy::default(),
            parallel: false,
        }
    }
}

impl TypeMapConfig {
    /// Set the platform binding assembly
    ///
    /// ## Arguments
    /// * 'assembly' - Assembly name, without file extension
    #[must_use]
    pub fn with_platform_assembly(mut self, assembly: &str) -> Self {
        self.platform_assembly = assembly.to_string();
        self
    }

    /// Set the package naming policy
    #[must_use]
    pub fn with_package_naming(mut self, policy: PackageNamingPolicy) -> Self {
        self.package_naming = policy;
        self
    }

    /// Enable or disable the parallel build
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Returns true if the assembly's namespaces map to Java packages verbatim
    #[must_use]
    pub fn is_platform_assembly(&self, assembly: &str) -> bool {
        self.platform_assembly == assembly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TypeMapConfig::default();
        assert_eq!(config.platform_assembly, "Mono.Android");
        assert_eq!(config.package_naming, PackageNamingPolicy::LowercaseCrc64);
        assert!(!config.parallel);
        assert!(config.is_platform_assembly("Mono.Android"));
        assert!(!config.is_platform_assembly("mono.android"));
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!(
            "crc64".parse::<PackageNamingPolicy>().ok(),
            Some(PackageNamingPolicy::LowercaseCrc64)
        );
        assert_eq!(
            "lowercase".parse::<PackageNamingPolicy>().ok(),
            Some(PackageNamingPolicy::Lowercase)
        );
        assert_eq!(
            "lowercase-with-assembly-name".parse::<PackageNamingPolicy>().ok(),
            Some(PackageNamingPolicy::LowercaseWithAssemblyName)
        );
        assert_eq!(
            "md5".parse::<PackageNamingPolicy>().ok(),
            Some(PackageNamingPolicy::LowercaseMd5)
        );
        assert!("sha1".parse::<PackageNamingPolicy>().is_err());
    }

    #[test]
    fn test_builder_setters() {
        let config = TypeMapConfig::default()
            .with_platform_assembly("Java.Interop")
            .with_package_naming(PackageNamingPolicy::Lowercase)
            .with_parallel(true);

        assert!(config.is_platform_assembly("Java.Interop"));
        assert_eq!(config.package_naming, PackageNamingPolicy::Lowercase);
        assert!(config.parallel);
    }
}
