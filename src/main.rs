use std::io::{self, Write};

use clap::{Parser, ValueEnum};
use serde::Serialize;
use text_similarity::{
    Corpus, DocumentMatrix, Error, Result, SimilarityTable, Tokenizer, Vocabulary,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Stem words (English) before counting
    #[arg(long, default_value = "false")]
    stem: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Also print the pairwise cosine similarity table
    #[arg(long, default_value = "false")]
    similarities: bool,

    /// Compare two documents by number, starting at 1
    #[arg(long, num_args = 2, value_names = ["DOC", "DOC"])]
    compare: Option<Vec<usize>>,
}

#[derive(Serialize, Debug)]
struct Comparison {
    a: String,
    b: String,
    similarity: f64,
}

#[derive(Serialize)]
struct Report<'a> {
    vocabulary: &'a Vocabulary,
    matrix: &'a DocumentMatrix,
    #[serde(skip_serializing_if = "Option::is_none")]
    similarities: Option<&'a [Vec<f64>]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    comparison: Option<Comparison>,
}

fn compare(matrix: &DocumentMatrix, docs: &[usize]) -> Result<Comparison> {
    let [a, b] = docs else {
        return Err(Error::Generic("Expected two document numbers".to_string()));
    };
    let position = |doc: usize| {
        (1..=matrix.rows().len())
            .contains(&doc)
            .then(|| doc - 1)
            .ok_or(Error::DocumentNotFound(doc))
    };
    let (a, b) = (position(*a)?, position(*b)?);
    let similarity = matrix.similarity(a, b)?;

    Ok(Comparison {
        a: matrix.index()[a].clone(),
        b: matrix.index()[b].clone(),
        similarity,
    })
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=warn", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();

    let tokenizer = if args.stem {
        Tokenizer::with_stemming()?
    } else {
        Tokenizer::new()?
    };

    let corpus = Corpus::sample();
    let matrix = DocumentMatrix::build(&corpus, &tokenizer);
    let similarities = args.similarities.then(|| SimilarityTable::new(&matrix));
    let comparison = args
        .compare
        .as_deref()
        .map(|docs| compare(&matrix, docs))
        .transpose()?;

    let mut out = io::stdout().lock();

    match args.format {
        Format::Text => {
            writeln!(out, "{:?}", matrix.rows())?;
            writeln!(out)?;
            writeln!(out, "{matrix}")?;

            if let Some(table) = &similarities {
                writeln!(out)?;
                writeln!(out, "{table}")?;
            }

            if let Some(Comparison { a, b, similarity }) = &comparison {
                writeln!(out)?;
                writeln!(out, "cosine_similarity({a}, {b}) = {similarity:.4}")?;
            }
        }
        Format::Json => {
            let report = Report {
                vocabulary: matrix.columns(),
                matrix: &matrix,
                similarities: similarities.as_ref().map(SimilarityTable::values),
                comparison,
            };

            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        }
    }

    Ok(())
}
