use std::path::PathBuf;

use anyhow::Context;
use jnitypemap::{interop::peer_types, JniNameResolver, TypeMapConfig};
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::load_graph,
    output::{print_output, render_table, Column},
};

const COLUMNS: [Column; 4] = [
    Column::right("#"),
    Column::left("JNI Name"),
    Column::left("Type"),
    Column::left("Assembly"),
];

#[derive(Debug, Serialize)]
struct PeerEntry {
    index: usize,
    jni_name: String,
    name: String,
    assembly: String,
}

#[derive(Debug, Serialize)]
struct PeersOutput {
    peers: Vec<PeerEntry>,
    count: usize,
}

pub fn run(paths: &[PathBuf], config: TypeMapConfig, opts: &GlobalOptions) -> anyhow::Result<()> {
    let graph = load_graph(paths)?;
    let resolver = JniNameResolver::new(&graph).with_config(config);

    let mut entries = Vec::new();
    for (index, id) in peer_types(&graph).into_iter().enumerate() {
        let node = &graph[id];
        let jni_name = resolver
            .resolve(id)
            .with_context(|| format!("failed to name type: {}", node.fullname()))?;

        entries.push(PeerEntry {
            index,
            jni_name,
            name: node.fullname().to_string(),
            assembly: node.assembly.clone(),
        });
    }

    let count = entries.len();
    let output = PeersOutput {
        peers: entries,
        count,
    };

    print_output(&output, opts, |out| {
        let rows: Vec<Vec<String>> = out
            .peers
            .iter()
            .map(|entry| {
                vec![
                    entry.index.to_string(),
                    entry.jni_name.clone(),
                    entry.name.clone(),
                    entry.assembly.clone(),
                ]
            })
            .collect();
        print!("{}", render_table(&COLUMNS, &rows));
        println!();
        println!("{} peer types", out.count);
    })
}
