use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use jnitypemap::{
    interop::{
        config::DEFAULT_PLATFORM_ASSEMBLY,
        emit::{DEFAULT_CLASS_NAME, DEFAULT_NAMESPACE},
    },
    PackageNamingPolicy, TypeMapConfig, TypeMapFormat,
};

/// jnitypemap - JNI names and typemaps for .NET types with Java peers
#[derive(Debug, Parser)]
#[command(name = "jnitypemap", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Options controlling how JNI names are derived.
#[derive(Debug, Args)]
pub struct NamingOptions {
    /// Assembly whose namespaces are used verbatim as Java packages.
    #[arg(long, value_name = "NAME", default_value = DEFAULT_PLATFORM_ASSEMBLY)]
    pub platform_assembly: String,

    /// Package naming for other assemblies: crc64, lowercase, lowercase-with-assembly-name, md5.
    #[arg(long, value_name = "POLICY", default_value = "crc64")]
    pub package_naming: PackageNamingPolicy,
}

impl NamingOptions {
    pub fn config(&self) -> TypeMapConfig {
        TypeMapConfig::default()
            .with_platform_assembly(&self.platform_assembly)
            .with_package_naming(self.package_naming)
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build the typemap of all types with a Java peer.
    Build {
        /// Manifest files or directories (scanned recursively for *.json).
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<PathBuf>,

        /// Write the typemap to a file instead of stdout.
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format: csharp, text, or json.
        #[arg(short, long, default_value = "csharp")]
        format: TypeMapFormat,

        #[command(flatten)]
        naming: NamingOptions,

        /// Name the types of each assembly on a separate worker thread.
        #[arg(long)]
        parallel: bool,

        /// Namespace of the generated C# class.
        #[arg(long, value_name = "NS", default_value = DEFAULT_NAMESPACE)]
        namespace: String,

        /// Name of the generated C# class.
        #[arg(long = "class", value_name = "NAME", default_value = DEFAULT_CLASS_NAME)]
        class_name: String,
    },

    /// List all types with a Java peer and their JNI names.
    Peers {
        /// Manifest files or directories (scanned recursively for *.json).
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<PathBuf>,

        #[command(flatten)]
        naming: NamingOptions,
    },

    /// Derive the JNI name of a single type.
    Name {
        /// Manifest files or directories (scanned recursively for *.json).
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<PathBuf>,

        /// Full name of the type (e.g. Acme.Outer/Inner).
        #[arg(long, value_name = "FULLNAME")]
        r#type: String,

        #[command(flatten)]
        naming: NamingOptions,
    },
}
