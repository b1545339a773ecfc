//! Recommend command implementation for the Gurmao CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use gurmao_core::{Catalog, DEFAULT_SAVED_FILE, JsonFileCollection, Query, RawQuery};
use gurmao_fs::open_utf8_file;
use gurmao_scorer::{JitterStrategy, RecommendationEngine, RenderedRecommendations};
use log::{debug, info};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_CATALOG, ARG_JITTER, ARG_SAVED, ARG_SEED, CliError, JITTER_NONE, JITTER_SEEDED,
    JITTER_SYSTEM, write_json,
};

/// CLI arguments for the `recommend` subcommand.
///
/// Query fields are kept as raw strings so that malformed values degrade to
/// "not specified" instead of aborting the command.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score every restaurant in the catalog against the given \
                 mood, occasion, party size, city, price level and free-text \
                 wishes, then print the ranked cards and an explanation of \
                 the top pick as JSON. Unrecognised values are ignored.",
    about = "Recommend restaurants for a query"
)]
#[ortho_config(prefix = "GURMAO")]
pub(crate) struct RecommendArgs {
    /// Mood, e.g. "romantika" or "kamarádi".
    #[arg(long, value_name = "mood")]
    #[serde(default)]
    pub(crate) mood: Option<String>,
    /// Occasion, e.g. "výročí" or "business dinner".
    #[arg(long, value_name = "occasion")]
    #[serde(default)]
    pub(crate) occasion: Option<String>,
    /// Number of people.
    #[arg(long, value_name = "n")]
    #[serde(default)]
    pub(crate) group_size: Option<String>,
    /// City to eat in.
    #[arg(long, value_name = "city")]
    #[serde(default)]
    pub(crate) city: Option<String>,
    /// Price level from 1 (budget) to 4 (luxury).
    #[arg(long, value_name = "level")]
    #[serde(default)]
    pub(crate) price_level: Option<String>,
    /// Free-text wishes matched against restaurant keywords.
    #[arg(long, value_name = "text")]
    #[serde(default)]
    pub(crate) text: Option<String>,
    /// Catalog JSON file; the built-in catalog is used when omitted.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Jitter mode: none, seeded or system.
    #[arg(long = ARG_JITTER, value_name = "mode")]
    #[serde(default)]
    pub(crate) jitter: Option<String>,
    /// Seed for seeded jitter. Implies `--jitter seeded` when no mode is set.
    #[arg(long = ARG_SEED, value_name = "n")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// Saved-collection file used to flag saved restaurants.
    #[arg(long = ARG_SAVED, value_name = "path")]
    #[serde(default)]
    pub(crate) saved: Option<Utf8PathBuf>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    /// Query after raw-input coercion.
    pub(crate) query: Query,
    /// Catalog override; `None` selects the built-in catalog.
    pub(crate) catalog: Option<Utf8PathBuf>,
    pub(crate) jitter: JitterStrategy,
    /// Saved-collection file.
    pub(crate) saved: Utf8PathBuf,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        match &self.catalog {
            Some(path) => require_existing(path, ARG_CATALOG),
            None => Ok(()),
        }
    }
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match gurmao_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let jitter = jitter_strategy(args.jitter.as_deref(), args.seed)?;
        let query = Query::from(RawQuery {
            mood: args.mood,
            occasion: args.occasion,
            group_size: args.group_size,
            city: args.city,
            price_level: args.price_level,
            free_text: args.text,
        });
        Ok(Self {
            query,
            catalog: args.catalog,
            jitter,
            saved: args
                .saved
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_SAVED_FILE)),
        })
    }
}

fn jitter_strategy(mode: Option<&str>, seed: Option<u64>) -> Result<JitterStrategy, CliError> {
    let normalised = mode.map(|m| m.trim().to_lowercase());
    match (normalised.as_deref(), seed) {
        (None, None) => Ok(JitterStrategy::System),
        (None, Some(seed)) => Ok(JitterStrategy::Seeded { seed }),
        (Some(JITTER_NONE), _) => Ok(JitterStrategy::None),
        (Some(JITTER_SEEDED), seed) => Ok(JitterStrategy::Seeded {
            seed: seed.unwrap_or_default(),
        }),
        (Some(JITTER_SYSTEM), _) => Ok(JitterStrategy::System),
        (Some(_), _) => Err(CliError::InvalidJitterMode {
            value: mode.unwrap_or_default().to_owned(),
        }),
    }
}

#[derive(Debug, Serialize)]
struct RecommendOutput<'a> {
    query: &'a Query,
    #[serde(flatten)]
    rendered: &'a RenderedRecommendations,
}

pub(crate) fn run_recommend(args: RecommendArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    execute_recommend(&config, writer)
}

pub(crate) fn execute_recommend(
    config: &RecommendConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let catalog = match &config.catalog {
        Some(path) => load_catalog(path)?,
        None => Catalog::builtin(),
    };
    debug!("recommending from {} restaurants", catalog.len());
    let engine = RecommendationEngine::new(catalog);
    let saved = JsonFileCollection::new(config.saved.clone());
    let mut jitter = config.jitter.build();
    let rendered = engine.render_recommendations(&config.query, jitter.as_mut(), Some(&saved));
    if let Some(top) = rendered.top_pick() {
        info!(
            "top pick {} scored {}",
            top.result.restaurant().id,
            top.result.score()
        );
    }
    write_json(
        writer,
        &RecommendOutput {
            query: &config.query,
            rendered: &rendered,
        },
    )
}

/// Loads a JSON catalog document from disk.
pub(crate) fn load_catalog(path: &Utf8Path) -> Result<Catalog, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenCatalog {
        path: path.to_path_buf(),
        source,
    })?;
    Catalog::from_reader(BufReader::new(file)).map_err(|source| CliError::LoadCatalog {
        path: path.to_path_buf(),
        source,
    })
}
