use std::path::PathBuf;

use anyhow::Context;
use jnitypemap::{
    interop::{has_java_peer, package_name},
    JniNameResolver, TypeMapConfig,
};
use serde::Serialize;

use crate::{app::GlobalOptions, commands::common::load_graph, output::print_output};

#[derive(Debug, Serialize)]
struct NameOutput {
    name: String,
    assembly: String,
    has_java_peer: bool,
    package: String,
    jni_name: String,
}

pub fn run(
    paths: &[PathBuf],
    fullname: &str,
    config: TypeMapConfig,
    opts: &GlobalOptions,
) -> anyhow::Result<()> {
    let graph = load_graph(paths)?;
    let Some(id) = graph.get_by_fullname(fullname) else {
        anyhow::bail!("type not found: {fullname}");
    };
    let node = &graph[id];

    // the package of a nested type is the package of its outermost declaring type
    let mut outermost = node;
    while let Some(declaring) = outermost.declaring {
        outermost = &graph[declaring];
    }

    let resolver = JniNameResolver::new(&graph).with_config(config);
    let jni_name = resolver
        .resolve(id)
        .with_context(|| format!("failed to name type: {fullname}"))?;

    let output = NameOutput {
        name: node.fullname().to_string(),
        assembly: node.assembly.clone(),
        has_java_peer: has_java_peer(&graph, id),
        package: package_name(outermost, resolver.config()),
        jni_name,
    };

    print_output(&output, opts, |out| {
        println!("Type:      {}", out.name);
        println!("Assembly:  {}", out.assembly);
        println!("Java peer: {}", if out.has_java_peer { "yes" } else { "no" });
        println!("Package:   {}", out.package);
        println!("JNI name:  {}", out.jni_name);
    })
}
