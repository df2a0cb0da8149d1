use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use otp_field::cli::{CliArgs, OutputFormat, ScriptSource, StartupConfig};
use otp_field::messages::FieldEvent;
use otp_field::surface::{HeadlessSurface, Surface};
use otp_field::view::OtpView;
use otp_field::{script, OtpConfig, OtpInput};

/// Surface that prints each render as one line
struct TerminalSurface;

impl Surface for TerminalSurface {
    fn render(&mut self, view: &OtpView) {
        println!("{}", view.to_line());
    }

    fn focus(&mut self, index: usize) {
        tracing::trace!(index, "terminal focus");
    }
}

/// One line of `--json` output
#[derive(Serialize)]
struct StepReport<'a> {
    step: usize,
    event: &'a FieldEvent,
    prevent_default: bool,
    code: String,
    active_index: usize,
    slots: Vec<String>,
    complete: bool,
}

fn main() -> Result<()> {
    otp_field::tracing::init();

    let args = CliArgs::parse();
    let startup = args.into_config().map_err(anyhow::Error::msg)?;

    let config = resolve_config(&startup)?;
    let events = match &startup.source {
        ScriptSource::File(path) => script::load_events(path)?,
        ScriptSource::Stdin => script::read_events(std::io::stdin().lock())?,
    };
    tracing::info!(
        slots = config.number_of_inputs,
        events = events.len(),
        "replaying script"
    );

    match startup.output {
        OutputFormat::Text => replay_text(config, &events),
        OutputFormat::Json => replay_json(config, &events),
    }
}

/// CLI flag → explicit config file → user config → defaults
fn resolve_config(startup: &StartupConfig) -> Result<OtpConfig> {
    let mut config = match &startup.config_path {
        Some(path) => OtpConfig::load_from(path)?,
        None => OtpConfig::load(),
    };
    if let Some(inputs) = startup.inputs {
        config.number_of_inputs = inputs;
    }
    Ok(config)
}

fn replay_text(config: OtpConfig, events: &[FieldEvent]) -> Result<()> {
    let mut input = OtpInput::mount_with_callback(config, TerminalSurface, |code: &str| {
        println!("code: {:?}", code);
    });

    for event in events {
        println!("> {}", describe(event));
        let response = input.handle(event.clone());
        if response.prevent_default {
            println!("  (default prevented)");
        }
    }

    if input.is_complete() {
        println!("complete: {:?}", input.code());
    }
    input.unmount();
    Ok(())
}

fn replay_json(config: OtpConfig, events: &[FieldEvent]) -> Result<()> {
    let notifications = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&notifications);
    let mut input = OtpInput::mount_with_callback(config, HeadlessSurface::new(), move |code| {
        sink.borrow_mut().push(code.to_string());
    });

    for (step, event) in events.iter().enumerate() {
        let response = input.handle(event.clone());
        input.surface_mut().clear_history();
        let report = StepReport {
            step,
            event,
            prevent_default: response.prevent_default,
            code: input.code(),
            active_index: input.state().active_index(),
            slots: input.state().value_strings(),
            complete: input.is_complete(),
        };
        let line = serde_json::to_string(&report).context("Failed to serialize step report")?;
        println!("{}", line);
    }

    tracing::debug!(
        notifications = notifications.borrow().len(),
        "replay finished"
    );
    Ok(())
}

fn describe(event: &FieldEvent) -> String {
    match event {
        FieldEvent::Change { value } => format!("change {:?}", value),
        FieldEvent::KeyDown { key } => format!("key {}", key),
        FieldEvent::Paste { text } => format!("paste {:?}", text),
        FieldEvent::Focus { index } => format!("focus slot {}", index),
    }
}
