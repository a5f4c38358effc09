//! NCBI taxonomy index for the velella bioinformatics crates.
//!
//! Builds a static in-memory index over an NCBI taxonomy dump and answers
//! lowest-common-ancestor queries in constant time:
//!
//! - **Node store** — [`TaxonNode`]s in a dense arena with a sparse
//!   [`TaxId`] map honoring merged-id aliases
//! - **LCA engine** — Euler tour + sparse-table [`RangeMinQuery`]
//! - **Query surface** — [`NcbiTaxonomy`]: pairwise and n-ary LCA, ancestor
//!   tests, lineages, rank projections, clade count rollups
//!
//! # Example
//!
//! ```
//! use velella_tax::NcbiTaxonomy;
//!
//! let nodes = "1\t|\t1\t|\tno_rank\t|\t\n\
//!              2\t|\t1\t|\tsuperkingdom\t|\t\n\
//!              561\t|\t2\t|\tgenus\t|\t\n\
//!              562\t|\t561\t|\tspecies\t|\t\n";
//! let names = "1\t|\troot\t|\t\t|\tscientific name\t|\n\
//!              2\t|\tBacteria\t|\t\t|\tscientific name\t|\n\
//!              561\t|\tEscherichia\t|\t\t|\tscientific name\t|\n\
//!              562\t|\tEscherichia coli\t|\t\t|\tscientific name\t|\n";
//!
//! let taxonomy = NcbiTaxonomy::new(nodes, names, "").unwrap();
//! assert_eq!(taxonomy.lca_pair(562, 2), 2);
//! assert!(taxonomy.is_ancestor(561, 562));
//! assert_eq!(
//!     taxonomy.tax_lineage(taxonomy.node(562).unwrap()),
//!     "Bacteria;Escherichia;Escherichia coli"
//! );
//! ```

pub mod rmq;
pub mod taxonomy;

pub use rmq::RangeMinQuery;
pub use taxonomy::{rank_ordinal, NcbiTaxonomy, TaxId, TaxonNode};
