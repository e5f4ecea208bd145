//! HPVCO tooling — fetch, check, inspect, export, and enrich the HPV
//! Cancer Ontology.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use hpvco_conformance::ValidationReport;
use hpvco_ontology::{serializer, Ontology};
use hpvco_store::{Format, OntologyStore};

/// Command-line interface definition.
#[derive(Parser)]
#[command(name = "hpvco", version, about = "HPV Cancer Ontology tooling")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Command {
    /// Print per-topic counts of the built-in ontology.
    Summary,
    /// Serialize the built-in ontology to a file or stdout.
    Export {
        /// Output serialization.
        #[arg(long, value_enum, default_value_t = ExportFormat::RdfXml)]
        format: ExportFormat,
        /// Output file; stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export all artifacts into a directory and validate them.
    Publish {
        /// Target directory for hpvco.rdf, hpvco.ttl, hpvco.nt, hpvco.json.
        #[arg(default_value = "public")]
        dir: PathBuf,
    },
    /// Fetch the published document from its permanent URL.
    Fetch {
        /// Source URL.
        #[arg(long, default_value = hpvco_store::DOCUMENT_URL)]
        url: String,
        /// Output file; stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Load a document and run the schema validators.
    Check {
        /// Document to check; the built-in serialization when omitted.
        file: Option<PathBuf>,
        /// Declared serialization; inferred from the extension when omitted.
        #[arg(long, value_enum)]
        format: Option<LoadFormat>,
    },
    /// Look up an entity by IRI, fragment, or label.
    Inspect {
        /// IRI, fragment within the HPVCO namespace, or label/synonym.
        identifier: String,
        /// Document to query; the built-in serialization when omitted.
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Migrate legacy seeAlso/comment annotations into the curated form.
    Enrich {
        /// Input document (RDF/XML, Turtle, or N-Triples).
        source: PathBuf,
        /// Output RDF/XML document.
        destination: PathBuf,
    },
}

/// Output serializations of `export`.
#[derive(Clone, Copy, ValueEnum)]
enum ExportFormat {
    /// RDF/XML, the publication format.
    RdfXml,
    /// Turtle.
    Turtle,
    /// N-Triples.
    Ntriples,
    /// JSON-LD.
    Jsonld,
}

/// Input serializations of `check` and `inspect`.
#[derive(Clone, Copy, ValueEnum)]
enum LoadFormat {
    /// RDF/XML.
    RdfXml,
    /// Turtle.
    Turtle,
    /// N-Triples.
    Ntriples,
}

impl From<LoadFormat> for Format {
    fn from(value: LoadFormat) -> Format {
        match value {
            LoadFormat::RdfXml => Format::RdfXml,
            LoadFormat::Turtle => Format::Turtle,
            LoadFormat::Ntriples => Format::NTriples,
        }
    }
}

fn main() -> Result<()> {
    match Cli::parse().command {
        Command::Summary => summary(),
        Command::Export { format, output } => export(format, output.as_deref()),
        Command::Publish { dir } => publish(&dir),
        Command::Fetch { url, output } => fetch(&url, output.as_deref()),
        Command::Check { file, format } => check(file.as_deref(), format),
        Command::Inspect { identifier, file } => inspect(&identifier, file.as_deref()),
        Command::Enrich {
            source,
            destination,
        } => enrich(&source, &destination),
    }
}

fn summary() -> Result<()> {
    let ontology = Ontology::full();
    println!("HPV Cancer Ontology v{}", ontology.version);
    println!("  Topics:       {}", ontology.topics.len());
    println!("  Classes:      {}", ontology.class_count());
    println!("  Properties:   {}", ontology.property_count());
    println!("  Individuals:  {}", ontology.individual_count());
    println!();
    for module in &ontology.topics {
        println!(
            "  {:14} {:24} {:>2} classes, {:>2} properties, {:>2} individuals",
            module.topic.key,
            module.topic.label,
            module.classes.len(),
            module.properties.len(),
            module.individuals.len(),
        );
    }
    Ok(())
}

fn render(format: ExportFormat) -> Result<String> {
    let ontology = Ontology::full();
    Ok(match format {
        ExportFormat::RdfXml => serializer::rdfxml::to_rdf_xml(ontology),
        ExportFormat::Turtle => serializer::turtle::to_turtle(ontology),
        ExportFormat::Ntriples => serializer::ntriples::to_ntriples(ontology),
        ExportFormat::Jsonld => {
            serde_json::to_string_pretty(&serializer::jsonld::to_json_ld(ontology))
                .context("failed to render JSON-LD")?
        }
    })
}

fn export(format: ExportFormat, output: Option<&Path>) -> Result<()> {
    let rendered = render(format)?;
    match output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("wrote {}", path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

fn publish(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;
    for (name, format) in [
        ("hpvco.rdf", ExportFormat::RdfXml),
        ("hpvco.ttl", ExportFormat::Turtle),
        ("hpvco.nt", ExportFormat::Ntriples),
        ("hpvco.json", ExportFormat::Jsonld),
    ] {
        let path = dir.join(name);
        std::fs::write(&path, render(format)?)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("wrote {}", path.display());
    }
    let report = hpvco_conformance::validators::artifacts::validate(dir)?;
    print_report(&report);
    finish(&report)
}

fn fetch(url: &str, output: Option<&Path>) -> Result<()> {
    let body = hpvco_store::fetch_document(url)?;
    match output {
        Some(path) => {
            std::fs::write(path, &body)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("saved {} bytes to {}", body.len(), path.display());
        }
        None => print!("{body}"),
    }
    Ok(())
}

fn load(file: Option<&Path>, format: Option<LoadFormat>) -> Result<OntologyStore> {
    match file {
        Some(path) => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let format = format.map(Format::from).or_else(|| {
                path.to_str().and_then(Format::from_path)
            });
            let Some(format) = format else {
                bail!(
                    "cannot infer the serialization of {}; pass --format",
                    path.display()
                );
            };
            Ok(OntologyStore::load_str(&source, format)?)
        }
        None => {
            let rendered = serializer::rdfxml::to_rdf_xml(Ontology::full());
            Ok(OntologyStore::load_str(&rendered, Format::RdfXml)?)
        }
    }
}

fn check(file: Option<&Path>, format: Option<LoadFormat>) -> Result<()> {
    let store = load(file, format)?;
    println!("loaded {} triples", store.triple_count());

    let mut report = hpvco_conformance::run_all(&store);
    if file.is_none() {
        // The built-in data gets the curated checks as well.
        report.extend(hpvco_conformance::run_curated());
    }
    print_report(&report);
    finish(&report)
}

fn inspect(identifier: &str, file: Option<&Path>) -> Result<()> {
    let store = load(file, None)?;
    let entity = store.resolve(identifier)?;
    println!("{}", entity.iri);
    for kind in &entity.kinds {
        println!("  kind:        {}", kind.as_str());
    }
    for label in &entity.labels {
        println!("  label:       {label}");
    }
    for definition in &entity.definitions {
        println!("  definition:  {definition}");
    }
    for synonym in &entity.synonyms {
        println!("  synonym:     {synonym}");
    }
    for xref in &entity.xrefs {
        println!("  xref:        {xref}");
    }
    for superclass in &entity.superclasses {
        println!("  subClassOf:  {superclass}");
    }
    println!("  statements:  {}", entity.statements.len());
    Ok(())
}

fn enrich(source: &Path, destination: &Path) -> Result<()> {
    let text = std::fs::read_to_string(source)
        .with_context(|| format!("failed to read {}", source.display()))?;
    let format = source
        .to_str()
        .and_then(Format::from_path)
        .unwrap_or(Format::RdfXml);
    let graph = hpvco_store::load_graph(&text, format)?;
    let (enriched, stats) = hpvco_enrichment::enrich_graph(&graph)?;
    let xml = hpvco_enrichment::to_rdf_xml(&enriched)?;
    std::fs::write(destination, xml)
        .with_context(|| format!("failed to write {}", destination.display()))?;
    println!(
        "enriched {} classes ({} skipped); wrote {}",
        stats.classes_enriched,
        stats.skipped,
        destination.display()
    );
    Ok(())
}

fn print_report(report: &ValidationReport) {
    for finding in &report.findings {
        let tag = match finding.severity {
            hpvco_conformance::Severity::Pass => "PASS",
            hpvco_conformance::Severity::Warning => "WARN",
            hpvco_conformance::Severity::Failure => "FAIL",
        };
        println!("[{tag}] {}: {}", finding.check, finding.message);
        for detail in &finding.details {
            println!("         - {detail}");
        }
    }
    println!(
        "{} findings, {} warnings, {} violations",
        report.findings.len(),
        report.warning_count(),
        report.failure_count()
    );
}

fn finish(report: &ValidationReport) -> Result<()> {
    if report.all_passed() {
        Ok(())
    } else {
        bail!("validation failed with {} violations", report.failure_count())
    }
}
