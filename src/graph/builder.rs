//! Incremental construction of a [`SymbolGraph`].
//!
//! The upstream resolver (or a test) declares symbols one by one; `finish`
//! freezes the result. Member maps keep declaration order because the order
//! of declarations is part of the generated output.

use text_size::{TextRange, TextSize};

use crate::base::{FileId, FileKind, Loc, Name, SourceFile, constants, name_path};

use super::symbol::{
    ClassData, FieldData, MethodData, Symbol, SymbolData, SymbolId, TypeMemberData,
};
use super::table::SymbolGraph;

#[derive(Debug)]
pub struct GraphBuilder {
    graph: SymbolGraph,
    /// Text of each file, grown by `append_source` until `finish`.
    texts: Vec<String>,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    pub fn new() -> Self {
        let root = Symbol {
            name: Name::new("<root>"),
            owner: SymbolId::ROOT,
            loc: None,
            data: SymbolData::Class(ClassData {
                is_module: true,
                ..ClassData::default()
            }),
        };
        Self {
            graph: SymbolGraph {
                symbols: vec![root],
                files: Vec::new(),
            },
            texts: Vec::new(),
        }
    }

    pub fn root(&self) -> SymbolId {
        SymbolId::ROOT
    }

    /// Read access to the graph under construction.
    pub fn graph(&self) -> &SymbolGraph {
        &self.graph
    }

    pub fn add_file(&mut self, path: &str, kind: FileKind) -> FileId {
        let id = FileId::new(self.graph.files.len());
        self.graph.files.push(SourceFile::new(path, kind, ""));
        self.texts.push(String::new());
        id
    }

    /// Append a declaration to a file and return its location.
    pub fn append_source(&mut self, file: FileId, text: &str) -> Loc {
        let buffer = &mut self.texts[file.index()];
        let start = TextSize::of(buffer.as_str());
        buffer.push_str(text);
        let end = TextSize::of(buffer.as_str());
        buffer.push('\n');
        Loc::new(file, TextRange::new(start, end))
    }

    pub fn set_loc(&mut self, id: SymbolId, loc: Loc) {
        self.graph.symbols[id.index()].loc = Some(loc);
    }

    /// Declare `text` in `file` and make it the location of `id`.
    pub fn declare_at(&mut self, id: SymbolId, file: FileId, text: &str) -> Loc {
        let loc = self.append_source(file, text);
        self.set_loc(id, loc);
        loc
    }

    fn push(&mut self, owner: SymbolId, name: &str, data: SymbolData) -> SymbolId {
        let id = SymbolId::new(self.graph.symbols.len());
        let name = Name::new(name);
        self.graph.symbols.push(Symbol {
            name: name.clone(),
            owner,
            loc: None,
            data,
        });
        if let SymbolData::Class(class) = self.graph.data_mut(owner) {
            class.members.insert(name, id);
        }
        id
    }

    fn add_class_or_module(&mut self, owner: SymbolId, name: &str, is_module: bool) -> SymbolId {
        if let Some(existing) = self.graph.lookup_member(owner, name) {
            if self.graph.is_class(existing) {
                return existing;
            }
        }
        self.push(
            owner,
            name,
            SymbolData::Class(ClassData {
                is_module,
                ..ClassData::default()
            }),
        )
    }

    /// Declare (or reopen) a class.
    pub fn add_class(&mut self, owner: SymbolId, name: &str) -> SymbolId {
        self.add_class_or_module(owner, name, false)
    }

    /// Declare (or reopen) a module.
    pub fn add_module(&mut self, owner: SymbolId, name: &str) -> SymbolId {
        self.add_class_or_module(owner, name, true)
    }

    /// Declare (or reopen) every module along a `::`-separated path.
    pub fn add_module_path(&mut self, path: &str) -> SymbolId {
        name_path(path)
            .iter()
            .fold(SymbolId::ROOT, |scope, name| self.add_module(scope, name))
    }

    /// Apply `update` to a class's data. No-op if `id` is not a class.
    pub fn update_class(&mut self, id: SymbolId, update: impl FnOnce(&mut ClassData)) {
        if let SymbolData::Class(class) = self.graph.data_mut(id) {
            update(class);
        }
    }

    pub fn set_superclass(&mut self, id: SymbolId, superclass: SymbolId) {
        self.update_class(id, |class| class.superclass = Some(superclass));
    }

    pub fn add_mixin(&mut self, id: SymbolId, mixin: SymbolId) {
        self.update_class(id, |class| class.mixins.push(mixin));
    }

    /// The singleton class of `class`, created on first request.
    pub fn singleton_of(&mut self, class: SymbolId) -> SymbolId {
        if let Some(existing) = self.graph.singleton_class(class) {
            return existing;
        }
        let owner = self.graph.owner(class);
        let name = format!("<Class:{}>", self.graph.name(class));
        let id = SymbolId::new(self.graph.symbols.len());
        self.graph.symbols.push(Symbol {
            name: Name::new(name),
            owner,
            loc: None,
            data: SymbolData::Class(ClassData {
                attached: Some(class),
                ..ClassData::default()
            }),
        });
        self.update_class(class, |data| {
            data.singleton = Some(id);
            data.members.insert(Name::new(constants::SINGLETON), id);
        });
        id
    }

    pub fn add_method(&mut self, owner: SymbolId, name: &str, method: MethodData) -> SymbolId {
        self.push(owner, name, SymbolData::Method(method))
    }

    pub fn add_field(&mut self, owner: SymbolId, name: &str, field: FieldData) -> SymbolId {
        self.push(owner, name, SymbolData::Field(field))
    }

    pub fn add_type_member(
        &mut self,
        owner: SymbolId,
        name: &str,
        member: TypeMemberData,
    ) -> SymbolId {
        let id = self.push(owner, name, SymbolData::TypeMember(member));
        self.update_class(owner, |class| class.type_members.push(id));
        id
    }

    /// Declare a generic parameter of `method`.
    pub fn add_type_argument(&mut self, method: SymbolId, name: &str) -> SymbolId {
        let id = self.push(method, name, SymbolData::TypeArgument);
        if let SymbolData::Method(data) = self.graph.data_mut(method) {
            data.type_arguments.push(id);
        }
        id
    }

    pub fn finish(self) -> SymbolGraph {
        let mut graph = self.graph;
        for (file, text) in graph.files.iter_mut().zip(self.texts) {
            file.text = text.into();
        }
        graph
    }
}
