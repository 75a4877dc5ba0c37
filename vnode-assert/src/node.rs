//! Virtual node data model
//!
//!     The trees inspected by this crate are built elsewhere, by an element builder. This
//!     module only describes their shape: a [`VNode`] has a type, an attribute mapping and an
//!     ordered list of children, where every child is either another node or an opaque leaf
//!     [`Value`] such as a piece of text.
//!
//!     Values compare structurally, except for [`Handler`] and [`Component`], which compare by
//!     identity: a clone is the same handler, two handlers created separately never are.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Attribute mapping of a node. Keys are unique, and a key that maps to a falsy value is
/// still present.
pub type Attributes = BTreeMap<String, Value>;

/// Any value a node, an attribute or a child can hold
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
    Handler(Handler),
    Component(Component),
    Node(Box<VNode>),
}

impl Value {
    /// `null`, `false`, `0`, `NaN` and the empty text are falsy; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Text(s) => !s.is_empty(),
            _ => true,
        }
    }

    pub fn as_node(&self) -> Option<&VNode> {
        match self {
            Value::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Short name of the value's kind, used when reporting shape errors
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Text(_) => "text",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Handler(_) => "handler",
            Value::Component(_) => "component",
            Value::Node(_) => "node",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "{:?}", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Map(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
            Value::Handler(_) => write!(f, "[handler]"),
            Value::Component(c) => write!(f, "[component {}]", c.name()),
            Value::Node(node) => write!(f, "{}", node),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n as f64)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(entries: BTreeMap<String, Value>) -> Self {
        Value::Map(entries)
    }
}

impl From<Handler> for Value {
    fn from(handler: Handler) -> Self {
        Value::Handler(handler)
    }
}

impl From<Component> for Value {
    fn from(component: Component) -> Self {
        Value::Component(component)
    }
}

impl From<VNode> for Value {
    fn from(node: VNode) -> Self {
        Value::Node(Box::new(node))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// A virtual node: `{type, attributes, children}`
#[derive(Debug, Clone, PartialEq)]
pub struct VNode {
    pub node_type: NodeType,
    pub attributes: Attributes,
    pub children: Vec<Value>,
}

impl VNode {
    pub fn new(
        node_type: impl Into<NodeType>,
        attributes: Attributes,
        children: Vec<Value>,
    ) -> Self {
        Self {
            node_type: node_type.into(),
            attributes,
            children,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }
}

impl fmt::Display for VNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.node_type)
    }
}

/// What kind of node this is: an element tag name or a component descriptor
#[derive(Debug, Clone, PartialEq)]
pub enum NodeType {
    Tag(String),
    Component(Component),
}

impl NodeType {
    /// The empty tag name is the only falsy node type.
    pub fn is_truthy(&self) -> bool {
        match self {
            NodeType::Tag(tag) => !tag.is_empty(),
            NodeType::Component(_) => true,
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeType::Tag(tag) => write!(f, "{}", tag),
            NodeType::Component(c) => write!(f, "{}", c.name()),
        }
    }
}

impl From<&str> for NodeType {
    fn from(tag: &str) -> Self {
        NodeType::Tag(tag.to_string())
    }
}

impl From<String> for NodeType {
    fn from(tag: String) -> Self {
        NodeType::Tag(tag)
    }
}

impl From<Component> for NodeType {
    fn from(component: Component) -> Self {
        NodeType::Component(component)
    }
}

/// Opaque component descriptor, compared by identity.
///
/// The name is only used for display; two components with the same name are different
/// components unless one is a clone of the other.
#[derive(Clone)]
pub struct Component {
    name: Arc<str>,
}

impl Component {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Arc::from(name.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Component {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.name, &other.name)
    }
}

impl Eq for Component {}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Component").field(&self.name()).finish()
    }
}

type Callback = dyn Fn(&Value) + Send + Sync;

/// Callable attribute value, such as an event handler. Compared by identity.
#[derive(Clone)]
pub struct Handler {
    callback: Arc<Callback>,
}

impl Handler {
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&Value) + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(callback),
        }
    }

    pub fn call(&self, event: &Value) {
        (self.callback)(event)
    }
}

impl PartialEq for Handler {
    fn eq(&self, other: &Self) -> bool {
        // compare data addresses only, vtables may be duplicated across codegen units
        Arc::as_ptr(&self.callback) as *const () == Arc::as_ptr(&other.callback) as *const ()
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handler({:p})", Arc::as_ptr(&self.callback) as *const ())
    }
}
