//! # Docsift
//!
//! Persona-driven document section ranking for research workflows.
//!
//! Docsift ranks the paragraphs of one or more documents by relevance to a
//! stated reader persona and a job-to-be-done description, producing one
//! ranked JSON record per document via the `sift` CLI.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────┐   ┌──────────────────────────────┐   ┌──────────┐
//! │ Discovery │──▶│  Pipeline                     │──▶│  Sink    │
//! │ PDF/TXT   │   │ Segment → Score → Rank        │   │ JSON/doc │
//! └───────────┘   └──────────────▲───────────────┘   └──────────┘
//!                                │
//!                      persona + job keywords
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! sift inputs                                # show discoverable documents
//! sift analyze --persona "climate scientist" --job "assess risk"
//! sift rank report.pdf --persona "analyst" --job "review findings"
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Core data types |
//! | [`lexicon`] | Tokenizer and stop-word resource |
//! | [`normalize`] | Text canonicalization for matching |
//! | [`keywords`] | Keyword extraction from descriptions |
//! | [`segment`] | Paragraph segmentation of page text |
//! | [`score`] | Keyword-density relevance scoring |
//! | [`rank`] | Ranking, selection, and title derivation |
//! | [`assemble`] | Result record assembly |
//! | [`extract`] | Per-page document text extraction |
//! | [`discover`] | Input file discovery |
//! | [`sink`] | JSON result persistence |
//! | [`analyze`] | Batch orchestration |

pub mod analyze;
pub mod assemble;
pub mod config;
pub mod discover;
pub mod extract;
pub mod inputs;
pub mod keywords;
pub mod lexicon;
pub mod models;
pub mod normalize;
pub mod progress;
pub mod rank;
pub mod score;
pub mod segment;
pub mod sink;
