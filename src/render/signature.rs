//! `sig` and `def` lines.
//!
//! Layout is decided here from already-printed parts; the renderer supplies
//! the parts (printing types feeds the closure).

use crate::base::constants;
use crate::error::{GenerateError, Result};
use crate::graph::{Parameter, SymbolId, Type};

use super::StubRenderer;
use super::options::RenderOptions;

/// Printed pieces of a signature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SigParts {
    pub is_final: bool,
    /// `abstract`, `overridable`, `override`, in that order.
    pub modifiers: Vec<&'static str>,
    /// `:U` entries.
    pub type_parameters: Vec<String>,
    /// `name: Type` entries.
    pub params: Vec<String>,
    /// `void` or `returns(Type)`.
    pub returns: String,
}

impl SigParts {
    pub fn layout(&self, options: &RenderOptions) -> String {
        let sig = if self.is_final { "sig(:final)" } else { "sig" };

        let mut chain = Vec::new();
        chain.extend(self.modifiers.iter().map(|modifier| modifier.to_string()));
        if !self.type_parameters.is_empty() {
            chain.push(format!(
                "type_parameters({})",
                self.type_parameters.join(", ")
            ));
        }
        if !self.params.is_empty() {
            chain.push(format!("params({})", self.params.join(", ")));
        }
        chain.push(self.returns.clone());

        let single = format!("{sig} {{{}}}", chain.join("."));
        if single.len() <= options.max_line_width && self.params.len() <= options.max_sig_params {
            return single;
        }

        let step = options.indent(1);
        let inner = options.indent(2);
        if !self.params.is_empty() {
            let params = self
                .params
                .iter()
                .map(|param| format!("{inner}{param}"))
                .collect::<Vec<_>>()
                .join(",\n");
            let index = chain.len() - 2;
            chain[index] = format!("params(\n{params}\n{step})");
        }
        format!("{sig} do\n{step}{}\nend", chain.join(&format!("\n{step}.")))
    }
}

/// Printed pieces of a `def` line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefParts {
    /// `private `, `private_class_method `, `protected ` or empty.
    pub visibility: &'static str,
    /// `self.` for singleton methods.
    pub prefix: &'static str,
    pub name: String,
    pub params: Vec<String>,
}

impl DefParts {
    pub fn layout(&self, options: &RenderOptions) -> String {
        let head = format!("{}def {}{}", self.visibility, self.prefix, self.name);
        if self.params.is_empty() {
            return head;
        }

        let single = format!("{head}({})", self.params.join(", "));
        if single.len() < options.max_line_width {
            return single;
        }

        let step = options.indent(1);
        let params = self
            .params
            .iter()
            .map(|param| format!("{step}{param}"))
            .collect::<Vec<_>>()
            .join(",\n");
        format!("{head}(\n{params}\n)")
    }
}

/// Rendered form of one formal parameter in a `def` line.
pub fn def_param(param: &Parameter) -> String {
    let name = &param.name;
    let flags = param.flags;
    if name.as_str() == constants::FORWARD_ARGS {
        return name.to_string();
    }
    let untyped_default = format!("T.let({}, T.untyped)", constants::UNSAFE_NIL);
    if flags.is_repeated {
        if flags.is_keyword {
            format!("**{name}")
        } else {
            format!("*{name}")
        }
    } else if flags.is_keyword {
        if flags.is_default {
            format!("{name}: {untyped_default}")
        } else {
            format!("{name}:")
        }
    } else if flags.is_block {
        format!("&{name}")
    } else if flags.is_default {
        format!("{name} = {untyped_default}")
    } else {
        name.to_string()
    }
}

/// Declared parameters up to and including a forwarding `...`, without the
/// synthetic block.
fn visible_params(params: &[Parameter]) -> impl Iterator<Item = &Parameter> {
    let mut done = false;
    params.iter().filter(|param| !param.flags.is_synthetic_block).take_while(move |param| {
        if done {
            return false;
        }
        done = param.name.as_str() == constants::FORWARD_ARGS;
        true
    })
}

impl StubRenderer<'_> {
    pub(super) fn signature(&mut self, method: SymbolId) -> String {
        let graph = self.graph;
        let Some(data) = graph.symbol(method).as_method() else {
            return String::new();
        };

        let flags = data.flags;
        let modifiers = [
            (flags.is_abstract, "abstract"),
            (flags.is_overridable, "overridable"),
            (flags.is_override, "override"),
        ]
        .into_iter()
        .filter_map(|(set, modifier)| set.then_some(modifier))
        .collect();

        let type_parameters = data
            .type_arguments
            .iter()
            .map(|&argument| format!(":{}", graph.name(argument)))
            .collect();

        let params = visible_params(&data.parameters)
            .filter(|param| param.name.as_str() != constants::FORWARD_ARGS)
            .map(|param| {
                let ty = self.show_type(param.ty.as_ref().unwrap_or(&Type::Untyped));
                format!("{}: {ty}", param.name)
            })
            .collect();

        let returns = match data.result_type.as_ref().unwrap_or(&Type::Untyped) {
            Type::Void => "void".to_string(),
            other => format!("returns({})", self.show_type(other)),
        };

        SigParts {
            is_final: flags.is_final,
            modifiers,
            type_parameters,
            params,
            returns,
        }
        .layout(self.options)
    }

    pub(super) fn definition(&self, method: SymbolId) -> Result<String> {
        let graph = self.graph;
        let symbol = graph.symbol(method);
        let Some(data) = symbol.as_method() else {
            return Ok(String::new());
        };
        if data.parameters.is_empty() {
            return Err(GenerateError::missing_parameters(graph.full_name(method)));
        }

        let on_singleton = graph.is_singleton_class(symbol.owner);
        let visibility = if data.flags.is_private {
            if on_singleton {
                "private_class_method "
            } else {
                "private "
            }
        } else if data.flags.is_protected {
            "protected "
        } else {
            ""
        };

        Ok(DefParts {
            visibility,
            prefix: if on_singleton { "self." } else { "" },
            name: symbol.name.to_string(),
            params: visible_params(&data.parameters).map(def_param).collect(),
        }
        .layout(self.options))
    }
}
