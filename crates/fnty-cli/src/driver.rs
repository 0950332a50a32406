//! Subcommand implementations. Each returns the text to print on stdout.

use crate::args::{CliArgs, Command, OutputFormat};
use crate::environment::{Environment, check_builtins_config};
use anyhow::{Context, Result};
use colored::Colorize;
use fnty_solver::{
    BuiltinsConfig, CallableId, DeclarationResolver, DeclarationStore,
    FunctionKind, FunctionTypeLayout, FunctionTypeShape, StandardBuiltins, TypeDatabase,
    TypeFormatter, TypeId, TypeInterner, materialize_parameters,
};
use serde::Serialize;
use std::fmt::Write;
use std::path::Path;
use tracing::info_span;

pub fn run(args: &CliArgs) -> Result<String> {
    match &args.command {
        Command::Check {
            env,
            format,
            max_arity,
        } => check(env, *format, *max_arity),
        Command::Builtins {
            max_arity,
            no_suspend,
            no_reflection,
            format,
        } => {
            let mut config = BuiltinsConfig {
                include_suspend_functions: !no_suspend,
                include_reflection_functions: !no_reflection,
                ..BuiltinsConfig::default()
            };
            if let Some(max_arity) = max_arity {
                config.max_function_arity = *max_arity;
            }
            builtins(&config, *format)
        }
    }
}

// =============================================================================
// check
// =============================================================================

/// How a type relates to the built-in function family.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Classification {
    /// Neither a function type nor a subtype of one.
    NotAFunction,
    /// A function type without a receiver.
    Plain,
    /// A function type whose first argument is a receiver.
    Extension,
    /// A `KFunction`/`KSuspendFunction` type.
    Reflective,
    /// A subtype of a function type, but not one itself.
    Inherited,
    /// Headed by a family member but missing its return slot.
    Malformed,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterReport {
    /// Synthesized positional name (`p1`, `p2`, ...).
    pub name: String,
    /// Source-level name recorded on the parameter type, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declared_name: Option<String>,
    #[serde(rename = "type")]
    pub type_display: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeReport {
    pub name: String,
    #[serde(rename = "type")]
    pub type_display: String,
    pub classification: Classification,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<FunctionKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arity: Option<u32>,
    pub is_function_type_or_subtype: bool,
    pub is_suspend_function_type_or_subtype: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ParameterReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
}

pub fn check(path: &Path, format: OutputFormat, max_arity: Option<u32>) -> Result<String> {
    let _span = info_span!("check", path = %path.display()).entered();
    let env = Environment::load(path, max_arity)?;
    let reports = report_types(&env);
    match format {
        OutputFormat::Json => {
            let mut out =
                serde_json::to_string_pretty(&reports).context("failed to serialize report")?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Text => Ok(render_reports(&reports)),
    }
}

pub fn report_types(env: &Environment) -> Vec<TypeReport> {
    (0u32..)
        .zip(&env.types)
        .map(|(index, (name, &type_id))| report_type(env, CallableId(index), name, type_id))
        .collect()
}

fn report_type(env: &Environment, owner: CallableId, name: &str, type_id: TypeId) -> TypeReport {
    let fns = env.function_types();
    let formatter = env.formatter();
    let kind = fns.function_kind_of(type_id);

    let mut report = TypeReport {
        name: name.to_string(),
        type_display: formatter.format(type_id),
        classification: Classification::NotAFunction,
        kind: kind.map(|(kind, _)| kind),
        arity: kind.map(|(_, arity)| arity),
        is_function_type_or_subtype: fns.is_function_type_or_subtype(type_id),
        is_suspend_function_type_or_subtype: fns.is_suspend_function_type_or_subtype(type_id),
        receiver: None,
        parameters: Vec::new(),
        return_type: None,
    };

    if fns.is_k_function_type(type_id) {
        report.classification = Classification::Reflective;
        return report;
    }
    if !fns.is_builtin_function_type(type_id) {
        if fns.is_builtin_function_type_or_subtype(type_id) {
            report.classification = Classification::Inherited;
        }
        return report;
    }

    let argument_count = env.interner.type_arguments(type_id).len();
    if FunctionTypeLayout::from_argument_count(argument_count, fns.has_extension_marker(type_id))
        .is_none()
    {
        report.classification = Classification::Malformed;
        return report;
    }

    let view = fns.decompose(type_id);
    report.classification = match view.shape {
        FunctionTypeShape::Plain => Classification::Plain,
        FunctionTypeShape::Extension(_) => Classification::Extension,
    };
    report.receiver = view.shape.receiver().map(|receiver| formatter.format(receiver));
    report.return_type = Some(formatter.format(view.return_type));
    report.parameters = materialize_parameters(&env.interner, owner, &view.parameters)
        .into_iter()
        .map(|parameter| ParameterReport {
            name: env.interner.resolve_atom(parameter.name),
            declared_name: fns
                .parameter_name_of(parameter.type_id)
                .map(|declared| env.interner.resolve_atom(declared)),
            type_display: formatter.format(parameter.type_id),
        })
        .collect();
    report
}

pub fn render_reports(reports: &[TypeReport]) -> String {
    let mut out = String::new();
    for report in reports {
        let _ = writeln!(out, "{}: {}", report.name.bold(), report.type_display);

        let summary = match (report.classification, report.kind, report.arity) {
            (Classification::Plain, Some(kind), Some(arity)) => {
                format!("{kind}{arity}").green().to_string()
            }
            (Classification::Extension, Some(kind), Some(arity)) => {
                format!("extension {kind}{arity}").green().to_string()
            }
            (Classification::Reflective, Some(kind), Some(arity)) => {
                format!("reflective {kind}{arity}").cyan().to_string()
            }
            (Classification::Malformed, _, _) => "malformed function type".red().to_string(),
            (Classification::Inherited, _, _) => {
                "function type through supertypes".yellow().to_string()
            }
            _ => "not a function type".dimmed().to_string(),
        };
        let _ = writeln!(out, "  {summary}");

        if let Some(receiver) = &report.receiver {
            let _ = writeln!(out, "  receiver: {receiver}");
        }
        for parameter in &report.parameters {
            match &parameter.declared_name {
                Some(declared) => {
                    let _ = writeln!(
                        out,
                        "  {} ({declared}): {}",
                        parameter.name, parameter.type_display
                    );
                }
                None => {
                    let _ = writeln!(out, "  {}: {}", parameter.name, parameter.type_display);
                }
            }
        }
        if let Some(return_type) = &report.return_type {
            let _ = writeln!(out, "  returns: {return_type}");
        }
    }
    out
}

// =============================================================================
// builtins
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuiltinReport {
    pub kind: FunctionKind,
    pub arity: u32,
    pub name: String,
    pub supertypes: Vec<String>,
}

pub fn builtin_reports(config: &BuiltinsConfig) -> Vec<BuiltinReport> {
    let interner = TypeInterner::new();
    let store = DeclarationStore::new();
    let builtins = StandardBuiltins::new(&interner, &store, config);
    let formatter = TypeFormatter::new(&interner, &store);

    builtins
        .members()
        .into_iter()
        .map(|(kind, arity, def)| BuiltinReport {
            kind,
            arity,
            name: store
                .qualified_name(def)
                .map(|name| interner.resolve_atom(name))
                .unwrap_or_else(|| kind.class_name(arity)),
            supertypes: store
                .declared_supertypes(def)
                .into_iter()
                .map(|supertype| formatter.format(supertype))
                .collect(),
        })
        .collect()
}

pub fn builtins(config: &BuiltinsConfig, format: OutputFormat) -> Result<String> {
    check_builtins_config(config)?;
    let reports = builtin_reports(config);
    match format {
        OutputFormat::Json => {
            let mut out =
                serde_json::to_string_pretty(&reports).context("failed to serialize builtins")?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Text => {
            let mut out = String::new();
            for report in &reports {
                let _ = writeln!(
                    out,
                    "{} : {}",
                    report.name.bold(),
                    report.supertypes.join(", ")
                );
            }
            Ok(out)
        }
    }
}

#[cfg(test)]
#[path = "../tests/driver_tests.rs"]
mod tests;
