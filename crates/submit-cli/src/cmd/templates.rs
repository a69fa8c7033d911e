use crate::output::print_json;
use anyhow::Context;
use clap::ValueEnum;
use std::path::Path;
use submit_core::template::{self, TemplateKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Pr,
    Issue,
}

impl From<KindArg> for TemplateKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Pr => TemplateKind::PullRequest,
            KindArg::Issue => TemplateKind::Issue,
        }
    }
}

pub fn run(root: &Path, kind: KindArg, json: bool) -> anyhow::Result<()> {
    let kind = TemplateKind::from(kind);
    let paths = template::find_templates(root, kind)
        .with_context(|| format!("failed to discover {kind} templates"))?;
    let infos = template::describe(root, &paths);

    if json {
        return print_json(&infos);
    }

    if infos.is_empty() {
        println!("No {kind} templates.");
        return Ok(());
    }

    let width = infos.iter().map(|t| t.name.len()).max().unwrap_or(0).max(4);
    println!("{:width$}  PATH", "NAME");
    for t in &infos {
        println!("{:width$}  {}", t.name, t.path.display());
    }
    Ok(())
}
