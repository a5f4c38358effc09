//! Static NCBI taxonomy index with O(1) LCA queries.
//!
//! [`NcbiTaxonomy`] is built once from the three NCBI dump files (`nodes`,
//! `names`, `merged`) and queried read-only thereafter. Nodes live in a flat
//! vector addressed by dense internal indices; a sparse tax-id → index map
//! bridges the external identifier space, with merged ids aliased onto their
//! replacements. Lowest-common-ancestor queries run in constant time via an
//! Euler tour of the tree and a sparse-table range-minimum structure over
//! the tour's depth sequence.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use log::{debug, warn};

use velella_core::{Result, VelellaError};

use crate::rmq::RangeMinQuery;

/// Field separator of the NCBI dump files.
const FIELD_DELIMITER: &str = "\t|\t";

/// Tax id of the taxonomy root.
const ROOT_TAX_ID: TaxId = 1;

/// Rank string marking a node without a named rank.
const NO_RANK: &str = "no_rank";

/// External NCBI taxon identifier. Sparse, positive, and subject to merges.
pub type TaxId = u32;

/// One node of the taxonomy tree.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaxonNode {
    /// Dense internal index; equals the node's position in the nodes file.
    pub id: usize,
    /// External NCBI tax id.
    pub tax_id: TaxId,
    /// Tax id of the parent; the root is its own parent.
    pub parent_tax_id: TaxId,
    /// Rank string as read from the dump (`species`, `genus`, …).
    pub rank: String,
    /// Scientific name, filled from the names file.
    pub name: String,
    /// Tax ids of the direct children.
    pub children: Vec<TaxId>,
}

/// Fixed ordinal of a recognized taxonomic rank, low ordinals being closest
/// to the leaves. `no_rank` and unrecognized strings have no ordinal.
pub fn rank_ordinal(rank: &str) -> Option<u8> {
    let ordinal = match rank {
        "forma" => 1,
        "varietas" => 2,
        "subspecies" => 3,
        "species" => 4,
        "species subgroup" => 5,
        "species group" => 6,
        "subgenus" => 7,
        "genus" => 8,
        "subtribe" => 9,
        "tribe" => 10,
        "subfamily" => 11,
        "family" => 12,
        "superfamily" => 13,
        "parvorder" => 14,
        "infraorder" => 15,
        "suborder" => 16,
        "order" => 17,
        "superorder" => 18,
        "infraclass" => 19,
        "subclass" => 20,
        "class" => 21,
        "superclass" => 22,
        "subphylum" => 23,
        "phylum" => 24,
        "superphylum" => 25,
        "subkingdom" => 26,
        "kingdom" => 27,
        "superkingdom" => 28,
        _ => return None,
    };
    Some(ordinal)
}

/// The static taxonomy index.
#[derive(Debug)]
pub struct NcbiTaxonomy {
    nodes: Vec<TaxonNode>,
    /// Sparse tax id → internal index, `None` for unassigned ids.
    dense: Vec<Option<u32>>,
    /// Euler tour of internal indices, one enter and one return event per
    /// node.
    euler: Vec<u32>,
    /// First tour position of each internal index.
    first_occurrence: Vec<u32>,
    /// Sparse-table RMQ over the tour's depth sequence.
    rmq: RangeMinQuery,
}

impl NcbiTaxonomy {
    /// Build the index from the raw contents of the three dump files.
    ///
    /// Nodes are ingested first, then merged-id aliases, then scientific
    /// names. Any structural inconsistency (unresolvable parent, name for a
    /// nonexistent taxon, missing root) fails the build.
    pub fn new(nodes: &str, names: &str, merged: &str) -> Result<Self> {
        let (mut nodes, mut dense) = load_nodes(nodes)?;
        let merged_count = load_merged(&mut dense, merged)?;
        load_names(&mut nodes, &dense, names)?;
        debug!(
            "loaded {} taxon nodes and {} merged aliases",
            nodes.len(),
            merged_count
        );

        let root_index = lookup(&dense, ROOT_TAX_ID).ok_or_else(|| {
            VelellaError::Taxonomy(format!("root taxon {} is missing", ROOT_TAX_ID))
        })?;

        let node_count = nodes.len();
        let mut euler = Vec::with_capacity(2 * node_count);
        let mut depths = Vec::with_capacity(2 * node_count);
        let mut first_occurrence = vec![0u32; node_count];
        euler_tour(
            &nodes,
            &dense,
            root_index,
            0,
            &mut euler,
            &mut depths,
            &mut first_occurrence,
        );

        Ok(Self {
            nodes,
            dense,
            euler,
            first_occurrence,
            rmq: RangeMinQuery::new(depths),
        })
    }

    /// Read the three dump files and build the index from their contents.
    pub fn from_dump_files(
        nodes: impl AsRef<Path>,
        names: impl AsRef<Path>,
        merged: impl AsRef<Path>,
    ) -> Result<Self> {
        let nodes = std::fs::read_to_string(nodes)?;
        let names = std::fs::read_to_string(names)?;
        let merged = std::fs::read_to_string(merged)?;
        Self::new(&nodes, &names, &merged)
    }

    /// Whether `tax_id` resolves to a node, directly or via a merge alias.
    pub fn node_exists(&self, tax_id: TaxId) -> bool {
        lookup(&self.dense, tax_id).is_some()
    }

    /// The node for `tax_id`, if any.
    pub fn node(&self, tax_id: TaxId) -> Option<&TaxonNode> {
        lookup(&self.dense, tax_id).map(|index| &self.nodes[index])
    }

    /// Dense internal index of `tax_id`; an error when the id is unknown.
    ///
    /// Callers expecting possibly-retired ids should gate with
    /// [`node_exists`](Self::node_exists) or use [`node`](Self::node).
    pub fn node_id(&self, tax_id: TaxId) -> Result<usize> {
        lookup(&self.dense, tax_id).ok_or_else(|| {
            VelellaError::InvalidInput(format!("invalid taxon id {}", tax_id))
        })
    }

    /// All nodes in internal-index order.
    pub fn nodes(&self) -> &[TaxonNode] {
        &self.nodes
    }

    /// Number of taxon nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Lowest common ancestor of two tax ids.
    ///
    /// An unknown id substitutes the other side, so lone stragglers of a
    /// superseded taxonomy snapshot do not poison a fold.
    pub fn lca_pair(&self, a: TaxId, b: TaxId) -> TaxId {
        let (i, j) = match (lookup(&self.dense, a), lookup(&self.dense, b)) {
            (None, _) => return b,
            (_, None) => return a,
            (Some(i), Some(j)) => (i, j),
        };
        self.nodes[self.lca_index(i, j)].tax_id
    }

    /// Lowest common ancestor of arbitrarily many tax ids.
    ///
    /// Unknown ids are skipped with a warning; `None` when no known id
    /// remains.
    pub fn lca(&self, taxa: &[TaxId]) -> Option<&TaxonNode> {
        let mut acc: Option<usize> = None;
        for &tax_id in taxa {
            match lookup(&self.dense, tax_id) {
                Some(index) => {
                    acc = Some(match acc {
                        Some(prev) => self.lca_index(prev, index),
                        None => index,
                    });
                }
                None => warn!("no node for tax id {}, ignoring it", tax_id),
            }
        }
        acc.map(|index| &self.nodes[index])
    }

    /// Whether `ancestor` lies on the root path of `child` (a node is its
    /// own ancestor).
    pub fn is_ancestor(&self, ancestor: TaxId, child: TaxId) -> bool {
        if ancestor == child {
            return true;
        }
        if ancestor == 0 || child == 0 {
            return false;
        }
        let child_index = match lookup(&self.dense, child) {
            Some(index) => index,
            None => {
                warn!("no node for tax id {}", child);
                return false;
            }
        };
        let ancestor_index = match lookup(&self.dense, ancestor) {
            Some(index) => index,
            None => {
                warn!("no node for tax id {}", ancestor);
                return false;
            }
        };
        self.lca_index(child_index, ancestor_index) == ancestor_index
    }

    /// Scientific names from just below the root down to `node`, joined
    /// with `;`.
    pub fn tax_lineage(&self, node: &TaxonNode) -> String {
        let mut names = vec![node.name.clone()];
        let mut current = node;
        while let Some(parent) = self.node(current.parent_tax_id) {
            if parent.parent_tax_id == parent.tax_id {
                break;
            }
            names.push(parent.name.clone());
            current = parent;
        }
        names.reverse();
        names.join(";")
    }

    /// Rank → name pairs along the root path of `node`.
    ///
    /// `no_rank` nodes are skipped, except for the root which is always
    /// included; when a rank occurs twice on the path the leaf-most name
    /// wins.
    pub fn all_ranks(&self, node: &TaxonNode) -> BTreeMap<String, String> {
        let mut result = BTreeMap::new();
        let mut current = node;
        loop {
            let at_root =
                current.tax_id == ROOT_TAX_ID || current.parent_tax_id == current.tax_id;
            if at_root || current.rank != NO_RANK {
                result
                    .entry(current.rank.clone())
                    .or_insert_with(|| current.name.clone());
            }
            if at_root {
                return result;
            }
            current = match self.node(current.parent_tax_id) {
                Some(parent) => parent,
                None => return result,
            };
        }
    }

    /// Project `node` onto the requested rank levels.
    ///
    /// Each answer is the lineage name at that rank when one exists,
    /// `uc_<name>` when the rank lies below the node's own rank (the node is
    /// an unclassified member of itself at that level), and `unknown` when
    /// the lineage simply has no taxon there.
    pub fn at_ranks(&self, node: &TaxonNode, levels: &[&str]) -> Vec<String> {
        let all = self.all_ranks(node);
        let node_ordinal = rank_ordinal(&node.rank);
        levels
            .iter()
            .map(|level| {
                if let Some(name) = all.get(*level) {
                    return name.clone();
                }
                match (rank_ordinal(level), node_ordinal) {
                    (Some(requested), Some(base)) if requested < base => {
                        format!("uc_{}", node.name)
                    }
                    _ => "unknown".to_string(),
                }
            })
            .collect()
    }

    /// Roll per-taxon counts up into per-clade counts below `root`.
    ///
    /// Each node's clade count is its own count (0 when absent from the
    /// input) plus the clade counts of its children; every node under
    /// `root` receives an entry.
    pub fn clade_counts(
        &self,
        taxon_counts: &HashMap<TaxId, usize>,
        root: TaxId,
    ) -> HashMap<TaxId, usize> {
        let mut clade_counts = HashMap::new();
        self.clade_summation(taxon_counts, &mut clade_counts, root);
        clade_counts
    }

    fn clade_summation(
        &self,
        taxon_counts: &HashMap<TaxId, usize>,
        clade_counts: &mut HashMap<TaxId, usize>,
        tax_id: TaxId,
    ) -> usize {
        let mut count = taxon_counts.get(&tax_id).copied().unwrap_or(0);
        if let Some(node) = self.node(tax_id) {
            for &child in &node.children {
                count += self.clade_summation(taxon_counts, clade_counts, child);
            }
        }
        clade_counts.insert(tax_id, count);
        count
    }

    /// LCA over internal indices: order the first tour occurrences, take
    /// the shallowest event in between.
    fn lca_index(&self, i: usize, j: usize) -> usize {
        if i == j {
            return i;
        }
        let mut v1 = self.first_occurrence[i];
        let mut v2 = self.first_occurrence[j];
        if v1 > v2 {
            std::mem::swap(&mut v1, &mut v2);
        }
        let position = self.rmq.query(v1 as usize, v2 as usize);
        self.euler[position] as usize
    }
}

fn lookup(dense: &[Option<u32>], tax_id: TaxId) -> Option<usize> {
    dense
        .get(tax_id as usize)
        .copied()
        .flatten()
        .map(|index| index as usize)
}

/// Split one dump line into fields, dropping the bare `\t|` line terminator
/// the NCBI dumps carry.
fn split_dump_line(line: &str) -> Vec<&str> {
    let line = line.strip_suffix("\t|").unwrap_or(line);
    line.split(FIELD_DELIMITER).collect()
}

fn parse_tax_id(field: &str) -> Result<TaxId> {
    field
        .trim()
        .parse()
        .map_err(|_| VelellaError::Parse(format!("invalid tax id '{}'", field)))
}

/// Ingest the nodes file: dense node store in file order plus the sparse
/// tax-id map, parents validated and children lists populated.
fn load_nodes(text: &str) -> Result<(Vec<TaxonNode>, Vec<Option<u32>>)> {
    let mut nodes: Vec<TaxonNode> = Vec::new();
    let mut max_tax_id: TaxId = 0;
    for line in text.lines() {
        let fields = split_dump_line(line);
        if fields.len() < 3 {
            return Err(VelellaError::Parse(format!(
                "malformed nodes line '{}'",
                line
            )));
        }
        let tax_id = parse_tax_id(fields[0])?;
        let parent_tax_id = parse_tax_id(fields[1])?;
        max_tax_id = max_tax_id.max(tax_id);
        nodes.push(TaxonNode {
            id: nodes.len(),
            tax_id,
            parent_tax_id,
            rank: fields[2].to_string(),
            name: String::new(),
            children: Vec::new(),
        });
    }

    let mut dense: Vec<Option<u32>> = vec![None; max_tax_id as usize + 1];
    for node in &nodes {
        let slot = &mut dense[node.tax_id as usize];
        if slot.is_none() {
            *slot = Some(node.id as u32);
        }
    }

    for i in 0..nodes.len() {
        let parent_tax_id = nodes[i].parent_tax_id;
        let parent_index = lookup(&dense, parent_tax_id).ok_or_else(|| {
            VelellaError::Taxonomy(format!("cannot find parent taxon {}", parent_tax_id))
        })?;
        if nodes[i].tax_id != parent_tax_id {
            let child_tax_id = nodes[i].tax_id;
            nodes[parent_index].children.push(child_tax_id);
        }
    }

    Ok((nodes, dense))
}

/// Ingest the merged file: alias each retired id onto its replacement's
/// index. Retired ids beyond the nodes-file maximum grow the map.
fn load_merged(dense: &mut Vec<Option<u32>>, text: &str) -> Result<usize> {
    let mut count = 0;
    for line in text.lines() {
        let fields = split_dump_line(line);
        if fields.len() < 2 {
            return Err(VelellaError::Parse(format!(
                "malformed merged line '{}'",
                line
            )));
        }
        let old_id = parse_tax_id(fields[0])? as usize;
        let new_id = parse_tax_id(fields[1])? as usize;
        if old_id >= dense.len() {
            dense.resize(old_id + 1, None);
        }
        if dense[old_id].is_none() {
            if let Some(new_index) = dense.get(new_id).copied().flatten() {
                dense[old_id] = Some(new_index);
                count += 1;
            }
        }
    }
    Ok(count)
}

/// Ingest the names file, keeping only `scientific name` entries.
fn load_names(nodes: &mut [TaxonNode], dense: &[Option<u32>], text: &str) -> Result<()> {
    for line in text.lines() {
        if !line.contains("scientific name") {
            continue;
        }
        let fields = split_dump_line(line);
        if fields.len() < 2 {
            return Err(VelellaError::Parse(format!(
                "malformed names line '{}'",
                line
            )));
        }
        let tax_id = parse_tax_id(fields[0])?;
        let index = lookup(dense, tax_id).ok_or_else(|| {
            VelellaError::Taxonomy(format!(
                "names file taxon {} not present in nodes file",
                tax_id
            ))
        })?;
        nodes[index].name = fields[1].to_string();
    }
    Ok(())
}

/// Depth-first Euler tour: append each node on entry and its parent again on
/// return, one depth step at a time. The root's return event re-appends the
/// root itself at depth −1.
fn euler_tour(
    nodes: &[TaxonNode],
    dense: &[Option<u32>],
    index: usize,
    depth: i32,
    euler: &mut Vec<u32>,
    depths: &mut Vec<i32>,
    first_occurrence: &mut [u32],
) {
    if first_occurrence[index] == 0 {
        first_occurrence[index] = euler.len() as u32;
    }
    euler.push(index as u32);
    depths.push(depth);

    for &child_tax_id in &nodes[index].children {
        if let Some(child_index) = lookup(dense, child_tax_id) {
            euler_tour(
                nodes,
                dense,
                child_index,
                depth + 1,
                euler,
                depths,
                first_occurrence,
            );
        }
    }

    let parent_index = lookup(dense, nodes[index].parent_tax_id).unwrap_or(index);
    euler.push(parent_index as u32);
    depths.push(depth - 1);
}
