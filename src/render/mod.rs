//! Interface Renderer: closure symbols to stub text.
//!
//! [`StubRenderer`] drains a [`Closure`] worklist and prints each popped
//! symbol. Rendering is itself a source of closure edges: every superclass,
//! mixin, nested class and printed type is fed back to the closure.
//!
//! Class bodies are printed in a fixed order:
//!
//! 1. directives (`abstract!`, `final!`, `interface!`, `sealed!`)
//! 2. mixins and type members
//! 3. struct properties (or the plain initializer)
//! 4. `prop`/`const` getters, then the record `flatfile do` block
//! 5. remaining instance methods
//! 6. the singleton section (`extend`, `type_template`, `def self.`)
//! 7. the `enums do` block

mod decl_lexer;
mod options;
mod output;
mod recognize;
mod signature;
mod type_printer;

pub use options::RenderOptions;
pub use output::Output;
pub use recognize::{Delegation, StructProp};
pub use signature::{DefParts, SigParts};
pub use type_printer::TypePrinter;

use rustc_hash::FxHashSet;

use crate::base::{Name, constants, name_path};
use crate::closure::{Closure, DependencyManifest};
use crate::error::{GenerateError, Result};
use crate::graph::{
    FieldKind, SymbolData, SymbolGraph, SymbolId, Type, TypeMemberData, Variance,
};

/// Well-known classes that change how a class is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KnownClasses {
    pub struct_base: Option<SymbolId>,
    pub enum_base: Option<SymbolId>,
    pub record_base: Option<SymbolId>,
    pub nil_class: Option<SymbolId>,
}

impl KnownClasses {
    /// Look up the configured base classes. Missing ones disable their feature.
    pub fn resolve(graph: &SymbolGraph, options: &RenderOptions) -> Self {
        let lookup = |path: &str| graph.lookup_path(&name_path(path));
        Self {
            struct_base: lookup(&options.struct_base),
            enum_base: lookup(&options.enum_base),
            record_base: lookup(&options.record_base),
            nil_class: lookup(&options.nil_class),
        }
    }
}

fn is_same(symbol: Option<SymbolId>, known: Option<SymbolId>) -> bool {
    matches!((symbol, known), (Some(a), Some(b)) if a == b)
}

/// Member names that never produce output.
fn is_reserved(name: &str) -> bool {
    name.starts_with(constants::UNIQUE_NAME_PREFIX)
        || name == constants::SINGLETON
        || name == constants::ATTACHED
}

pub struct StubRenderer<'a> {
    graph: &'a SymbolGraph,
    options: &'a RenderOptions,
    known: KnownClasses,
    closure: Closure<'a>,
    /// Methods, fields and type members already printed. Kept apart from the
    /// closure's visited set, which also holds symbols merely enqueued.
    rendered: FxHashSet<SymbolId>,
    out: Output,
    package: String,
}

impl<'a> StubRenderer<'a> {
    pub fn new(
        graph: &'a SymbolGraph,
        closure: Closure<'a>,
        options: &'a RenderOptions,
        known: KnownClasses,
        package: impl Into<String>,
    ) -> Self {
        Self {
            graph,
            options,
            known,
            closure,
            rendered: FxHashSet::default(),
            out: Output::new(options.indent_width),
            package: package.into(),
        }
    }

    pub fn closure(&self) -> &Closure<'a> {
        &self.closure
    }

    /// Offer a root (or any symbol) to the closure.
    pub fn enqueue(&mut self, symbol: SymbolId) -> bool {
        self.closure.maybe_enqueue(symbol)
    }

    /// Render until the worklist is empty.
    pub fn drain(&mut self) -> Result<()> {
        while let Some(symbol) = self.closure.pop() {
            self.render(symbol)?;
        }
        Ok(())
    }

    /// Text rendered since the last call.
    pub fn take_output(&mut self) -> String {
        self.out.take()
    }

    pub fn manifest(&self) -> DependencyManifest {
        self.closure.dependency_manifest()
    }

    fn render(&mut self, symbol: SymbolId) -> Result<()> {
        let graph = self.graph;
        match &graph.symbol(symbol).data {
            SymbolData::Class(_) => self.render_class(symbol),
            SymbolData::Method(_) => self.render_method(symbol, &mut Vec::new()),
            SymbolData::Field(_) => {
                self.render_field(symbol);
                Ok(())
            }
            SymbolData::TypeMember(_) | SymbolData::TypeArgument => Ok(()),
        }
    }

    /// Print `ty` and feed its symbols to the closure.
    fn show_type(&mut self, ty: &Type) -> String {
        self.closure.enqueue_symbols_in_type(ty);
        TypePrinter::new(self.graph, self.known.nil_class).show(ty)
    }

    fn is_enum_value(&self, class: SymbolId) -> bool {
        let parent = self.graph.superclass(class);
        is_same(parent.and_then(|parent| self.graph.superclass(parent)), self.known.enum_base)
    }

    fn render_class(&mut self, klass: SymbolId) -> Result<()> {
        let graph = self.graph;
        if !self.closure.owns(klass) || !self.closure.is_visited(klass) {
            return Err(GenerateError::ForeignSymbol {
                symbol: graph.full_name(klass),
                package: self.package.clone(),
            });
        }
        let Some(class) = graph.class(klass) else {
            return Ok(());
        };
        if self.is_enum_value(klass) {
            // Printed inside its enum's `enums do` block.
            if let Some(enum_class) = class.superclass {
                self.closure.maybe_enqueue(enum_class);
            }
            return Ok(());
        }
        if graph.name(klass).starts_with(constants::INTERNAL_NAME_PREFIX) {
            return Ok(());
        }
        let is_enum = is_same(class.superclass, self.known.enum_base);
        let is_struct = is_same(class.superclass, self.known.struct_base);

        let keyword = if class.is_module { "module" } else { "class" };
        match class.superclass {
            Some(superclass) => {
                self.closure.maybe_enqueue(superclass);
                self.out.println(format!(
                    "{keyword} {} < {}",
                    graph.full_name(klass),
                    graph.full_name(superclass)
                ));
            }
            None => self
                .out
                .println(format!("{keyword} {}", graph.full_name(klass))),
        }
        self.out.indent();

        for (set, directive) in [
            (class.is_abstract, "abstract!"),
            (class.is_final, "final!"),
            (class.is_interface, "interface!"),
            (class.is_sealed, "sealed!"),
        ] {
            if set {
                self.out.println(directive);
            }
        }

        for &mixin in &class.mixins {
            self.render_mixin(mixin);
        }
        for &member in &class.type_members {
            self.render_type_member(member);
        }

        let mut initializer = None;
        let mut methods = Vec::new();
        let mut fields = Vec::new();
        let mut enum_values = Vec::new();
        for (name, &member) in &class.members {
            if is_reserved(name) {
                continue;
            }
            match &graph.symbol(member).data {
                SymbolData::Class(member_class) => {
                    if self.closure.is_package_root(member) {
                        continue;
                    }
                    if is_enum && member_class.superclass == Some(klass) {
                        enum_values.push(member);
                    } else {
                        self.closure.maybe_enqueue(member);
                    }
                }
                SymbolData::Method(_) if name.as_str() == constants::INITIALIZE => {
                    initializer = Some(member);
                }
                SymbolData::Method(_) => methods.push(member),
                SymbolData::Field(field) => match field.kind {
                    FieldKind::Instance => fields.push(member),
                    FieldKind::ClassVariable => self.render_field(member),
                    FieldKind::Static => {
                        self.closure.maybe_enqueue(member);
                    }
                },
                SymbolData::TypeMember(_) | SymbolData::TypeArgument => {}
            }
        }

        match initializer {
            Some(initializer) if is_struct => {
                self.render_struct(klass, initializer, &mut methods, &mut fields)?;
            }
            Some(initializer) => self.render_method(initializer, &mut fields)?,
            None => {}
        }

        self.render_prop_methods(&mut methods, &mut fields);
        if class.superclass.is_some()
            && self
                .known
                .record_base
                .is_some_and(|record| graph.derives_from(klass, record))
        {
            self.render_record_fields(&mut methods);
        }

        for method in std::mem::take(&mut methods) {
            self.render_method(method, &mut fields)?;
        }

        if let Some(singleton) = class.singleton {
            self.render_singleton(klass, singleton, &mut fields)?;
        }

        if !enum_values.is_empty() {
            self.out.println("enums do");
            self.out.indent();
            for value in enum_values {
                self.out.println(format!("{} = new", graph.name(value)));
            }
            self.out.dedent();
            self.out.println("end");
        }

        self.out.dedent();
        self.out.println("end");
        Ok(())
    }

    fn render_mixin(&mut self, mixin: SymbolId) {
        let keyword = if self.graph.is_singleton_class(mixin) {
            "extend"
        } else {
            "include"
        };
        self.out
            .println(format!("{keyword} {}", self.graph.full_name(mixin)));
        self.closure.maybe_enqueue(mixin);
    }

    fn render_singleton(
        &mut self,
        klass: SymbolId,
        singleton: SymbolId,
        fields: &mut Vec<SymbolId>,
    ) -> Result<()> {
        let graph = self.graph;
        let Some(data) = graph.class(singleton) else {
            return Ok(());
        };
        let is_sealed = graph.class(klass).is_some_and(|class| class.is_sealed);

        for &mixin in &data.mixins {
            self.out
                .println(format!("extend {}", graph.full_name(mixin)));
            self.closure.maybe_enqueue(mixin);
        }
        for &member in &data.type_members {
            self.render_type_member(member);
        }

        for (name, &member) in &data.members {
            if is_reserved(name) {
                continue;
            }
            match &graph.symbol(member).data {
                SymbolData::Class(_) => {
                    if !self.closure.is_package_root(member) {
                        self.closure.maybe_enqueue(member);
                    }
                }
                SymbolData::Method(_) => {
                    if is_sealed && name.as_str() == constants::SEALED_SUBCLASSES {
                        continue;
                    }
                    self.render_method(member, fields)?;
                }
                SymbolData::Field(field) => match field.kind {
                    FieldKind::Instance | FieldKind::ClassVariable => self.render_field(member),
                    FieldKind::Static => {
                        self.closure.maybe_enqueue(member);
                    }
                },
                SymbolData::TypeMember(_) | SymbolData::TypeArgument => {}
            }
        }
        Ok(())
    }

    /// Struct properties from the initializer's keyword parameters. The
    /// accessors and backing fields of each property are consumed; every
    /// remaining method is rendered here.
    fn render_struct(
        &mut self,
        klass: SymbolId,
        initializer: SymbolId,
        methods: &mut Vec<SymbolId>,
        fields: &mut Vec<SymbolId>,
    ) -> Result<()> {
        let graph = self.graph;
        for prop in recognize::struct_props(graph, initializer) {
            let is_const = recognize::take_accessors(graph, methods, &prop.name);
            recognize::take_backing_field(graph, fields, &prop.name);
            self.render_prop(&prop.name, prop.ty.as_ref(), is_const, prop.has_default);
        }

        if graph.symbol(initializer).loc != graph.symbol(klass).loc {
            self.render_method(initializer, fields)?;
        }
        for method in std::mem::take(methods) {
            self.render_method(method, fields)?;
        }
        Ok(())
    }

    fn render_prop_methods(&mut self, methods: &mut Vec<SymbolId>, fields: &mut Vec<SymbolId>) {
        let graph = self.graph;
        let props: Vec<SymbolId> = methods
            .iter()
            .copied()
            .filter(|&method| recognize::is_prop_method(graph, method))
            .collect();
        for prop in props {
            let name = graph.name(prop);
            recognize::take_backing_field(graph, fields, name);
            let is_const = recognize::take_accessors(graph, methods, name);
            let ty = graph
                .symbol(prop)
                .as_method()
                .and_then(|method| method.result_type.as_ref());
            self.render_prop(name, ty, is_const, false);
        }
    }

    fn render_prop(&mut self, name: &Name, ty: Option<&Type>, is_const: bool, has_default: bool) {
        let ty = self.show_type(ty.unwrap_or(&Type::Untyped));
        let keyword = if is_const { "const" } else { "prop" };
        let default = if has_default {
            format!(", default: T.let({}, {ty})", constants::UNSAFE_NIL)
        } else {
            String::new()
        };
        self.out
            .println(format!("{keyword} :{name}, {ty}{default}"));
    }

    fn render_record_fields(&mut self, methods: &mut Vec<SymbolId>) {
        let graph = self.graph;
        let field_methods: Vec<SymbolId> = methods
            .iter()
            .copied()
            .filter(|&method| recognize::is_record_field_method(graph, method))
            .collect();
        if field_methods.is_empty() {
            return;
        }

        self.out.println("flatfile do");
        self.out.indent();
        for method in field_methods {
            let name = graph.name(method);
            recognize::take_accessors(graph, methods, name);
            self.out.println(format!("field :{name}"));
        }
        self.out.dedent();
        self.out.println("end");
    }

    fn render_type_member(&mut self, member: SymbolId) {
        if !self.rendered.insert(member) {
            return;
        }
        let graph = self.graph;
        let symbol = graph.symbol(member);
        if symbol.name.as_str() == constants::ATTACHED_CLASS {
            return;
        }
        let Some(data) = symbol.as_type_member() else {
            return;
        };
        let kind = if graph.is_singleton_class(symbol.owner) {
            "type_template"
        } else {
            "type_member"
        };
        let variance = self.show_variance(data);
        self.out
            .println(format!("{} = {kind}({variance})", symbol.name));
    }

    fn show_variance(&mut self, data: &TypeMemberData) -> String {
        if let Some(fixed) = &data.fixed {
            return format!("fixed: {}", self.show_type(fixed));
        }
        match data.variance {
            Variance::Covariant => ":out".to_string(),
            Variance::Invariant => String::new(),
            Variance::Contravariant => ":in".to_string(),
        }
    }

    /// Print a method. Any pending instance fields are declared in its body
    /// and cleared, so each field is declared once per class.
    fn render_method(&mut self, method: SymbolId, fields: &mut Vec<SymbolId>) -> Result<()> {
        if self.rendered.contains(&method) {
            return Ok(());
        }
        let graph = self.graph;
        let symbol = graph.symbol(method);
        if symbol.name.as_str() == constants::STATIC_INIT {
            return Ok(());
        }
        self.rendered.insert(method);
        let Some(data) = symbol.as_method() else {
            return Ok(());
        };

        if symbol.name.starts_with(constants::INTERNAL_NAME_PREFIX) {
            if symbol.name.as_str() == constants::MIXES_IN_CLASS_METHODS {
                self.render_mixes_in_class_methods(method, data.result_type.as_ref())?;
            }
            return Ok(());
        }

        if self.render_delegation(method)? {
            return Ok(());
        }

        if data.has_sig {
            let sig = self.signature(method);
            self.out.println(sig);
        }
        let def = self.definition(method)?;
        if fields.is_empty() || data.flags.is_abstract {
            self.out.println(format!("{def}; end"));
        } else {
            self.out.println(def);
            self.out.indent();
            for field in std::mem::take(fields) {
                self.render_field(field);
            }
            self.out.dedent();
            self.out.println("end");
        }
        Ok(())
    }

    fn render_mixes_in_class_methods(&mut self, method: SymbolId, result: Option<&Type>) -> Result<()> {
        let graph = self.graph;
        let invalid = || GenerateError::InvalidMixin {
            method: graph.full_name(method),
        };
        let Some(Type::Tuple(elems)) = result else {
            return Err(invalid());
        };
        if !elems.iter().all(|elem| matches!(elem, Type::ClassRef(_))) {
            return Err(invalid());
        }
        for elem in elems {
            let shown = self.show_type(elem);
            self.out
                .println(format!("mixes_in_class_methods({shown})"));
        }
        Ok(())
    }

    /// Print a delegation directive if `method` came from one.
    fn render_delegation(&mut self, method: SymbolId) -> Result<bool> {
        let graph = self.graph;
        let Some(first) = graph
            .symbol(method)
            .as_method()
            .and_then(|data| data.parameters.first())
        else {
            return Ok(false);
        };
        let declaration = first.name.as_str();
        match recognize::delegation(declaration) {
            None => Ok(false),
            Some(Delegation::Single) => {
                self.out.println(declaration);
                Ok(true)
            }
            Some(Delegation::Plural) => {
                let receiver = recognize::delegation_receiver(declaration).ok_or_else(|| {
                    GenerateError::invalid_delegation(graph.full_name(method), declaration)
                })?;
                self.out.println(format!(
                    "def_delegator {receiver}, :{}",
                    graph.name(method)
                ));
                Ok(true)
            }
        }
    }

    fn render_field(&mut self, field: SymbolId) {
        if !self.rendered.insert(field) {
            return;
        }
        let graph = self.graph;
        let symbol = graph.symbol(field);
        let Some(data) = symbol.as_field() else {
            return;
        };

        if data.kind == FieldKind::Static {
            match &data.result_type {
                // Alias a type template leaves on its owning class.
                Some(Type::Alias(target))
                    if graph.symbol(*target).as_type_member().is_some()
                        && graph.is_singleton_class(graph.owner(*target)) =>
                {
                    return;
                }
                Some(Type::ClassRef(value)) if self.is_enum_value(*value) => return,
                _ => {}
            }
            if data.is_type_alias {
                let shown = self.show_type(data.result_type.as_ref().unwrap_or(&Type::Untyped));
                self.out.println(format!(
                    "{} = T.type_alias {{{shown}}}",
                    graph.full_name(field)
                ));
                return;
            }
        }

        let decl = self.type_declaration(data.result_type.as_ref());
        let name = match data.kind {
            FieldKind::Static => graph.full_name(field),
            FieldKind::Instance | FieldKind::ClassVariable => symbol.name.to_string(),
        };
        self.out.println(format!("{name} = {decl}"));
    }

    fn type_declaration(&mut self, ty: Option<&Type>) -> String {
        match ty {
            Some(Type::Alias(alias)) => {
                self.closure.maybe_enqueue(*alias);
                self.graph.full_name(*alias)
            }
            Some(ty) => {
                let shown = self.show_type(ty);
                format!("T.let({}, {shown})", constants::UNSAFE_NIL)
            }
            None => format!("T.let({}, T.untyped)", constants::UNSAFE_NIL),
        }
    }
}

#[cfg(test)]
mod tests;
