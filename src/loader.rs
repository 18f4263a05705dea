// src/loader.rs
//! Delimited-text loaders for the input relations.
//!
//! These sit outside the core: the graph and taxonomy layers consume
//! in-memory records and never see a file format.
//!
//! Formats:
//! - synsets: `id,term term term,gloss` (one synset per line; the gloss
//!   and any further fields are ignored)
//! - hypernyms: `id,parent,parent,...`
//! - digraph: whitespace-separated integers `V E from to from to ...`

use std::fs;
use std::path::Path;

use crate::error::{Result, TaxonetError};
use crate::graph::Digraph;
use crate::taxonomy::{HypernymRecord, SynsetRecord, Taxonomy};

/// Reads a synset relation file.
///
/// # Errors
/// `Io` if the file cannot be read, `MalformedRecord` on a bad line.
pub fn load_synsets(path: &Path) -> Result<Vec<SynsetRecord>> {
    let content = read_file(path)?;
    let mut records = Vec::new();

    for (line, number) in numbered_lines(&content) {
        let mut fields = line.split(',');
        let id = parse_field(fields.next(), number, "missing synset id")?;
        let Some(synset) = fields.next() else {
            return Err(malformed(number, "missing synset terms"));
        };
        let terms = synset.split_whitespace().map(ToString::to_string).collect();
        records.push(SynsetRecord::new(id, terms));
    }

    Ok(records)
}

/// Reads a hypernym relation file.
///
/// # Errors
/// `Io` if the file cannot be read, `MalformedRecord` on a bad line.
pub fn load_hypernyms(path: &Path) -> Result<Vec<HypernymRecord>> {
    let content = read_file(path)?;
    let mut records = Vec::new();

    for (line, number) in numbered_lines(&content) {
        let mut fields = line.split(',');
        let id = parse_field(fields.next(), number, "missing hypernym id")?;
        let parents = fields
            .map(|f| parse_field(Some(f), number, "bad parent id"))
            .collect::<Result<Vec<usize>>>()?;
        records.push(HypernymRecord::new(id, parents));
    }

    Ok(records)
}

/// Reads both relation files and assembles a validated taxonomy.
///
/// # Errors
/// Loader failures plus everything `Taxonomy::new` can raise.
pub fn load_taxonomy(synsets: &Path, hypernyms: &Path) -> Result<Taxonomy> {
    let synset_records = load_synsets(synsets)?;
    let hypernym_records = load_hypernyms(hypernyms)?;
    Taxonomy::new(&synset_records, &hypernym_records)
}

/// Reads a digraph file: vertex count, edge count, then one pair of
/// endpoints per edge, all whitespace-separated.
///
/// # Errors
/// `Io` if the file cannot be read, `MalformedRecord` if the token
/// stream is short or non-numeric, `VertexOutOfRange` for bad endpoints.
pub fn load_digraph(path: &Path) -> Result<Digraph> {
    let content = read_file(path)?;
    let mut tokens = content.split_whitespace();

    let vertex_count = parse_field(tokens.next(), 1, "missing vertex count")?;
    let edge_count: usize = parse_field(tokens.next(), 1, "missing edge count")?;

    let mut graph = Digraph::new(vertex_count);
    for _ in 0..edge_count {
        let from = parse_field(tokens.next(), 1, "missing edge endpoint")?;
        let to = parse_field(tokens.next(), 1, "missing edge endpoint")?;
        graph.add_edge(from, to)?;
    }

    Ok(graph)
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| TaxonetError::Io {
        source,
        path: path.to_path_buf(),
    })
}

fn numbered_lines(content: &str) -> impl Iterator<Item = (&str, usize)> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (line.trim(), i + 1))
        .filter(|(line, _)| !line.is_empty())
}

fn parse_field(field: Option<&str>, line: usize, reason: &str) -> Result<usize> {
    let Some(field) = field else {
        return Err(malformed(line, reason));
    };
    field
        .trim()
        .parse()
        .map_err(|_| malformed(line, &format!("{reason}: {field:?}")))
}

fn malformed(line: usize, reason: &str) -> TaxonetError {
    TaxonetError::MalformedRecord {
        line,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_synsets() {
        let file = write_temp("0,entity,that which exists\n1,animal beast,a living thing\n");
        let records = load_synsets(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].terms, vec!["animal", "beast"]);
    }

    #[test]
    fn test_load_hypernyms() {
        let file = write_temp("1,0\n2,0,1\n");
        let records = load_hypernyms(file.path()).unwrap();
        assert_eq!(records[1].parents, vec![0, 1]);
    }

    #[test]
    fn test_load_digraph() {
        let file = write_temp("3\n2\n1 0\n2 0\n");
        let graph = load_digraph(file.path()).unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.adjacent(1), &[0]);
    }

    #[test]
    fn test_malformed_synset_line() {
        let file = write_temp("0,entity\nnot-a-number,animal\n");
        let err = load_synsets(file.path()).unwrap_err();
        assert!(matches!(err, TaxonetError::MalformedRecord { line: 2, .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = load_synsets(Path::new("no/such/file.txt")).unwrap_err();
        assert!(matches!(err, TaxonetError::Io { .. }));
    }
}
