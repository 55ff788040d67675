//! JSON reading and atomic writing of graph files.
//!
//! Writes go to a `<name>.tmp` sibling first and are renamed into place only
//! after the full document has been serialized and flushed.  A run that
//! fails mid-write therefore leaves the destination untouched, and the
//! temporary file is removed.
//!
//! Output is pretty-printed with 2-space indentation, matching the files the
//! downstream wayfinding consumer already reads.  Serialization is fully
//! deterministic, so reruns on unchanged input are byte-identical.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Serialize;

use waygraph_core::Edge;

use crate::error::GraphIoResult;
use crate::file::{EdgeList, GraphFile};

/// Read and decode a graph file.
///
/// Structural invariants are *not* checked here; call
/// [`GraphFile::validate`] when the file's origin is untrusted.
pub fn read_graph(path: &Path) -> GraphIoResult<GraphFile> {
    let text = fs::read_to_string(path)?;
    let graph: GraphFile = serde_json::from_str(&text)?;
    debug!(
        "read graph from {}: {} nodes, {} edges",
        path.display(),
        graph.nodes.len(),
        graph.edges.len()
    );
    Ok(graph)
}

/// Write a full graph file atomically.
pub fn write_graph(path: &Path, graph: &GraphFile) -> GraphIoResult<()> {
    write_json_atomic(path, graph)?;
    info!(
        "wrote {}: {} nodes, {} edges",
        path.display(),
        graph.nodes.len(),
        graph.edges.len()
    );
    Ok(())
}

/// Write an edges-only file atomically.
pub fn write_edges(path: &Path, edges: &[Edge]) -> GraphIoResult<()> {
    let list = EdgeList { edges: edges.to_vec() };
    write_json_atomic(path, &list)?;
    info!("wrote {}: {} edges", path.display(), edges.len());
    Ok(())
}

// ── Atomic write plumbing ─────────────────────────────────────────────────────

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> GraphIoResult<()> {
    let tmp = tmp_path(path);

    let result = (|| -> GraphIoResult<()> {
        let file = File::create(&tmp)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    })();

    if let Err(e) = result {
        // Best-effort cleanup; the original error is the one that matters.
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }

    fs::rename(&tmp, path)?;
    Ok(())
}
