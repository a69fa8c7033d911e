use super::templates::KindArg;
use crate::output::print_json;
use crate::prompt::TerminalAsker;
use crate::{defaults, editor};
use anyhow::Context;
use clap::Args;
use std::io::IsTerminal;
use std::path::Path;
use submit_core::config::Config;
use submit_core::survey::Survey;
use submit_core::template::{self, TemplateKind};
use submit_core::terminal::TtyKeys;
use submit_core::types::{Action, Decision, Defaults};

#[derive(Args)]
pub struct CreateArgs {
    /// Title (prompted for when omitted)
    #[arg(long, short = 't')]
    pub title: Option<String>,

    /// Body (prompted for when omitted)
    #[arg(long, short = 'b')]
    pub body: Option<String>,
}

pub fn run(root: &Path, kind: KindArg, args: CreateArgs, json: bool) -> anyhow::Result<()> {
    let title = args.title.as_deref().filter(|s| !s.is_empty());
    let body = args.body.as_deref().filter(|s| !s.is_empty());

    if (title.is_none() || body.is_none()) && !std::io::stdin().is_terminal() {
        anyhow::bail!("--title and --body are required when not running interactively");
    }

    let config = Config::load(root).context("failed to load config")?;
    let template_kind = TemplateKind::from(kind);

    let template_paths = if body.is_none() {
        template::find_templates(root, template_kind)
            .with_context(|| format!("failed to discover {template_kind} templates"))?
    } else {
        Vec::new()
    };

    let defaults = match kind {
        KindArg::Pr => defaults::from_last_commit(root),
        KindArg::Issue => Defaults::default(),
    };

    let mut asker = TerminalAsker::stdio(editor::resolve_editor(config.editor.as_deref()));
    let mut keys = TtyKeys;
    let mut out = std::io::stdout();
    let mut survey = Survey::new(&mut asker, &mut keys, &mut out, &config.fields);
    let decision = survey.title_body(title, body, &defaults, &template_paths)?;

    report(template_kind, &decision, json)
}

fn report(kind: TemplateKind, decision: &Decision, json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(&serde_json::json!({
            "kind": kind,
            "title": decision.title,
            "body": decision.body,
            "action": decision.action,
        }));
    }

    match decision.action {
        Action::Cancel => println!("Discarded."),
        Action::Submit | Action::Preview => {
            println!("Ready to submit {kind}: {}", decision.title);
            if !decision.body.is_empty() {
                println!();
                println!("{}", decision.body.trim_end());
            }
        }
    }
    Ok(())
}
