use crate::base::{FileId, Loc, Name, SourceFile};

use super::symbol::{ClassData, Symbol, SymbolData, SymbolId};

/// Immutable arena of symbols and the files they were declared in.
///
/// Construct with [`GraphBuilder`](super::GraphBuilder). All cross-symbol links
/// are [`SymbolId`] lookups into this store, so a `&SymbolGraph` can be shared
/// freely between threads.
#[derive(Debug, Clone)]
pub struct SymbolGraph {
    /// Arena storage for all symbols - single source of truth
    pub(super) symbols: Vec<Symbol>,
    pub(super) files: Vec<SourceFile>,
}

impl SymbolGraph {
    pub fn root(&self) -> SymbolId {
        SymbolId::ROOT
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn get(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id.index())
    }

    /// Symbol behind a handle handed out by this graph.
    ///
    /// Handles are only created by the builder of this graph, so they are
    /// always in bounds.
    pub fn symbol(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id.index()]
    }

    pub fn name(&self, id: SymbolId) -> &Name {
        &self.symbol(id).name
    }

    pub fn owner(&self, id: SymbolId) -> SymbolId {
        self.symbol(id).owner
    }

    pub fn class(&self, id: SymbolId) -> Option<&ClassData> {
        self.get(id).and_then(Symbol::as_class)
    }

    pub fn is_class(&self, id: SymbolId) -> bool {
        self.class(id).is_some()
    }

    pub fn is_singleton_class(&self, id: SymbolId) -> bool {
        self.get(id).is_some_and(Symbol::is_singleton_class)
    }

    pub fn superclass(&self, id: SymbolId) -> Option<SymbolId> {
        self.class(id).and_then(|class| class.superclass)
    }

    /// For a singleton class, the class it is attached to.
    pub fn attached_class(&self, id: SymbolId) -> Option<SymbolId> {
        self.class(id).and_then(|class| class.attached)
    }

    pub fn singleton_class(&self, id: SymbolId) -> Option<SymbolId> {
        self.class(id).and_then(|class| class.singleton)
    }

    pub fn file(&self, id: FileId) -> Option<&SourceFile> {
        self.files.get(id.index())
    }

    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    /// The source file a symbol was declared in.
    pub fn declaring_file(&self, id: SymbolId) -> Option<&SourceFile> {
        self.symbol(id).loc.and_then(|loc| self.file(loc.file))
    }

    pub fn source_text(&self, loc: Loc) -> Option<&str> {
        self.file(loc.file)?.slice(loc.range)
    }

    /// Original declaration text of a symbol, if it has a location.
    pub fn declaration_text(&self, id: SymbolId) -> Option<&str> {
        self.symbol(id).loc.and_then(|loc| self.source_text(loc))
    }

    /// Direct member of a class or module, without following aliases.
    pub fn lookup_member(&self, scope: SymbolId, name: &str) -> Option<SymbolId> {
        self.class(scope)?.members.get(name).copied()
    }

    /// Resolve a fully-qualified name path from the root.
    ///
    /// Every intermediate segment must name a class or module.
    pub fn lookup_path(&self, path: &[Name]) -> Option<SymbolId> {
        path.iter()
            .try_fold(SymbolId::ROOT, |scope, name| self.lookup_member(scope, name))
    }

    /// Resolve a `::`-separated path (test and fixture convenience).
    pub fn lookup(&self, path: &str) -> Option<SymbolId> {
        self.lookup_path(&crate::base::name_path(path))
    }

    /// Fully-qualified display name (`Outer::Inner::NAME`). The root renders as `<root>`.
    pub fn full_name(&self, id: SymbolId) -> String {
        if id.is_root() {
            return self.name(id).to_string();
        }
        let mut segments = Vec::new();
        let mut current = id;
        while !current.is_root() {
            let symbol = self.symbol(current);
            segments.push(symbol.name.as_str());
            current = symbol.owner;
        }
        segments.reverse();
        segments.join("::")
    }

    /// Walk the owner chain from `id` (inclusive) up to, but excluding, the root.
    pub fn owner_chain(&self, id: SymbolId) -> impl Iterator<Item = SymbolId> + '_ {
        let mut next = Some(id);
        std::iter::from_fn(move || {
            let current = next.filter(|current| !current.is_root())?;
            next = Some(self.owner(current));
            Some(current)
        })
    }

    /// True if `ancestor` appears on the superclass chain of `class` (inclusive).
    pub fn derives_from(&self, class: SymbolId, ancestor: SymbolId) -> bool {
        let mut current = Some(class);
        while let Some(id) = current {
            if id.is_root() {
                return false;
            }
            if id == ancestor {
                return true;
            }
            current = self.superclass(id);
        }
        false
    }

    pub fn symbols(&self) -> impl Iterator<Item = (SymbolId, &Symbol)> {
        self.symbols
            .iter()
            .enumerate()
            .map(|(index, symbol)| (SymbolId::new(index), symbol))
    }

    pub(super) fn data_mut(&mut self, id: SymbolId) -> &mut SymbolData {
        &mut self.symbols[id.index()].data
    }
}
