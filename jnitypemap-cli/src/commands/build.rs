use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use jnitypemap::{TypeMapBuilder, TypeMapConfig, TypeMapFormat, TypeMapWriter};
use serde::Serialize;

use crate::{app::GlobalOptions, commands::common::load_graph, output::print_output};

pub struct BuildOptions<'a> {
    pub output: Option<&'a Path>,
    pub format: TypeMapFormat,
    pub config: TypeMapConfig,
    pub namespace: &'a str,
    pub class_name: &'a str,
    pub global: &'a GlobalOptions,
}

#[derive(Debug, Serialize)]
struct BuildOutput {
    output: String,
    format: String,
    assemblies: usize,
    types: usize,
    entries: usize,
}

pub fn run(paths: &[PathBuf], opts: &BuildOptions<'_>) -> anyhow::Result<()> {
    let graph = load_graph(paths)?;
    let typemap = TypeMapBuilder::new(&graph)
        .with_config(opts.config.clone())
        .build()
        .context("failed to build typemap")?;

    let writer = TypeMapWriter::new(opts.format)
        .with_namespace(opts.namespace)
        .with_class_name(opts.class_name);

    let Some(path) = opts.output else {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        writer.write(&graph, &typemap, &mut out)?;
        out.flush()?;
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("failed to create output file: {}", path.display()))?;
    let mut out = BufWriter::new(file);
    writer.write(&graph, &typemap, &mut out)?;
    out.flush()
        .with_context(|| format!("failed to write output file: {}", path.display()))?;

    let output = BuildOutput {
        output: path.display().to_string(),
        format: opts.format.to_string(),
        assemblies: graph.modules().len(),
        types: graph.len(),
        entries: typemap.len(),
    };

    print_output(&output, opts.global, |out| {
        println!(
            "Wrote {} typemap entries ({} types in {} assemblies) to {} [{}]",
            out.entries, out.types, out.assemblies, out.output, out.format
        );
    })
}
