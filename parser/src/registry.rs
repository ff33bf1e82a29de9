//! FILENAME: parser/src/registry.rs
//! PURPOSE: Caller-extensible tables of constants, operators, unary
//! operators, and functions.
//! CONTEXT: The lexer consults the registry to decide whether an identifier
//! names a function or a constant and whether a symbol is a registered
//! operator; the evaluator resolves tokens back to their registered
//! operations. Entries are append-only and assigned stable indices at
//! registration time. The registry is populated during setup and read-only
//! afterwards, so a fully-built registry can back any number of concurrent
//! evaluations.
//!
//! REGISTRATION POLICY: first registration for a symbol or name wins;
//! re-registering is a silent no-op. A symbol may exist as both a binary
//! operator and a unary operator (e.g. '-'); the lexer disambiguates by
//! position, not the registry.

use std::collections::HashMap;

/// Binary operator operation: `(a, b) -> result`.
pub type BinaryOp = fn(f64, f64) -> f64;
/// Binary operator domain guard, checked before the operation runs.
pub type BinaryValidator = fn(f64, f64) -> bool;
/// Unary operator operation.
pub type UnaryOp = fn(f64) -> f64;
/// Unary operator domain guard.
pub type UnaryValidator = fn(f64) -> bool;
/// Function operation over a fixed-arity argument slice.
pub type FunctionOp = fn(&[f64]) -> f64;
/// Function domain guard over the full argument slice.
pub type FunctionValidator = fn(&[f64]) -> bool;

/// Grouping direction for equal-precedence operators. For unary operators
/// this doubles as position: `Right` is prefix (operand follows), `Left` is
/// postfix (operand already read).
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Associativity {
    Left,
    Right,
}

/// A named numeric constant. Immutable once registered.
#[derive(Debug, Clone)]
pub struct ConstantInfo {
    pub name: String,
    pub value: f64,
}

/// A binary operator. Higher precedence binds tighter.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub symbol: char,
    pub precedence: u8,
    pub associativity: Associativity,
    pub operation: BinaryOp,
    pub validator: BinaryValidator,
}

/// A unary operator, prefix (`Right`) or postfix (`Left`).
#[derive(Debug, Clone, Copy)]
pub struct UnaryInfo {
    pub symbol: char,
    pub associativity: Associativity,
    pub operation: UnaryOp,
    pub validator: UnaryValidator,
}

/// A named function with a fixed argument count.
#[derive(Debug, Clone)]
pub struct FunctionInfo {
    pub name: String,
    pub arity: usize,
    pub operation: FunctionOp,
    pub validator: FunctionValidator,
}

/// The symbol tables behind one evaluator instance.
#[derive(Debug, Default)]
pub struct Registry {
    constants: Vec<ConstantInfo>,
    constant_names: HashMap<String, usize>,
    operators: HashMap<char, OperatorInfo>,
    unaries: HashMap<char, UnaryInfo>,
    functions: Vec<FunctionInfo>,
    function_names: HashMap<String, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Registry::default()
    }

    // ----------------------------------------------------------------
    // Registration (chainable, first registration wins)
    // ----------------------------------------------------------------

    /// Registers a named constant. No-op if the name is already taken.
    pub fn register_constant(&mut self, name: impl Into<String>, value: f64) -> &mut Self {
        let name = name.into();
        if !self.constant_names.contains_key(&name) {
            let id = self.constants.len();
            self.constant_names.insert(name.clone(), id);
            self.constants.push(ConstantInfo { name, value });
        }
        self
    }

    /// Registers a binary operator. No-op if the symbol is already taken.
    pub fn register_operator(
        &mut self,
        symbol: char,
        precedence: u8,
        associativity: Associativity,
        operation: BinaryOp,
        validator: BinaryValidator,
    ) -> &mut Self {
        self.operators.entry(symbol).or_insert(OperatorInfo {
            symbol,
            precedence,
            associativity,
            operation,
            validator,
        });
        self
    }

    /// Registers a unary operator. `Associativity::Right` makes it prefix,
    /// `Associativity::Left` postfix. No-op if the symbol is already taken.
    pub fn register_unary(
        &mut self,
        symbol: char,
        associativity: Associativity,
        operation: UnaryOp,
        validator: UnaryValidator,
    ) -> &mut Self {
        self.unaries.entry(symbol).or_insert(UnaryInfo {
            symbol,
            associativity,
            operation,
            validator,
        });
        self
    }

    /// Registers a named function with a fixed arity.
    /// No-op if the name is already taken.
    pub fn register_function(
        &mut self,
        name: impl Into<String>,
        arity: usize,
        operation: FunctionOp,
        validator: FunctionValidator,
    ) -> &mut Self {
        let name = name.into();
        if !self.function_names.contains_key(&name) {
            let id = self.functions.len();
            self.function_names.insert(name.clone(), id);
            self.functions.push(FunctionInfo {
                name,
                arity,
                operation,
                validator,
            });
        }
        self
    }

    // ----------------------------------------------------------------
    // Lookup
    // ----------------------------------------------------------------

    /// Looks up a binary operator by its symbol.
    pub fn operator(&self, symbol: char) -> Option<&OperatorInfo> {
        self.operators.get(&symbol)
    }

    /// Looks up a unary operator by its symbol.
    pub fn unary(&self, symbol: char) -> Option<&UnaryInfo> {
        self.unaries.get(&symbol)
    }

    /// Looks up a constant by its registration index.
    pub fn constant(&self, id: usize) -> Option<&ConstantInfo> {
        self.constants.get(id)
    }

    /// Looks up a function by its registration index.
    pub fn function(&self, id: usize) -> Option<&FunctionInfo> {
        self.functions.get(id)
    }

    /// Resolves a constant name to its registration index.
    pub fn constant_index(&self, name: &str) -> Option<usize> {
        self.constant_names.get(name).copied()
    }

    /// Resolves a function name to its registration index.
    pub fn function_index(&self, name: &str) -> Option<usize> {
        self.function_names.get(name).copied()
    }

    /// True if `symbol` is registered as a prefix unary operator.
    pub fn is_prefix_unary(&self, symbol: char) -> bool {
        self.unary(symbol)
            .is_some_and(|info| info.associativity == Associativity::Right)
    }

    /// True if `symbol` is registered as a postfix unary operator.
    pub fn is_postfix_unary(&self, symbol: char) -> bool {
        self.unary(symbol)
            .is_some_and(|info| info.associativity == Associativity::Left)
    }
}
