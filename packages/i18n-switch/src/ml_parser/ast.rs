//! ML Parser AST
//!
//! HTML Abstract Syntax Tree node shapes produced by a `TemplateParser`.
//! Only the six node kinds the switch renderer understands are modelled.

/// Node type union
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Attribute(Attribute),
    Comment(Comment),
    Element(Element),
    Expansion(Expansion),
    ExpansionCase(ExpansionCase),
    Text(Text),
}

/// Text node
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub value: String,
}

impl Text {
    pub fn new(value: impl Into<String>) -> Self {
        Text {
            value: value.into(),
        }
    }
}

/// Expansion (ICU message format)
#[derive(Debug, Clone, PartialEq)]
pub struct Expansion {
    pub switch_value: String,
    pub expansion_type: String,
    pub cases: Vec<ExpansionCase>,
}

impl Expansion {
    pub fn new(
        switch_value: impl Into<String>,
        expansion_type: impl Into<String>,
        cases: Vec<ExpansionCase>,
    ) -> Self {
        Expansion {
            switch_value: switch_value.into(),
            expansion_type: expansion_type.into(),
            cases,
        }
    }
}

/// Expansion case
#[derive(Debug, Clone, PartialEq)]
pub struct ExpansionCase {
    pub value: String,
    pub expression: Vec<Node>,
}

impl ExpansionCase {
    pub fn new(value: impl Into<String>, expression: Vec<Node>) -> Self {
        ExpansionCase {
            value: value.into(),
            expression,
        }
    }
}

/// Attribute node
///
/// `value_nodes` is set by parsers that keep the value as a node list
/// (interpolations, translated ICU values); it wins over `value` when present.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
    pub value_nodes: Option<Vec<Node>>,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Attribute {
            name: name.into(),
            value: value.into(),
            value_nodes: None,
        }
    }

    pub fn with_value_nodes(mut self, nodes: Vec<Node>) -> Self {
        self.value_nodes = Some(nodes);
        self
    }
}

/// Element node
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    pub attrs: Vec<Attribute>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>, attrs: Vec<Attribute>, children: Vec<Node>) -> Self {
        Element {
            name: name.into(),
            attrs,
            children,
        }
    }
}

/// Comment node
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub value: Option<String>,
}

impl Comment {
    pub fn new(value: Option<String>) -> Self {
        Comment { value }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<Attribute> for Node {
    fn from(attribute: Attribute) -> Self {
        Node::Attribute(attribute)
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Node::Text(text)
    }
}

impl From<Comment> for Node {
    fn from(comment: Comment) -> Self {
        Node::Comment(comment)
    }
}

impl From<Expansion> for Node {
    fn from(expansion: Expansion) -> Self {
        Node::Expansion(expansion)
    }
}

impl From<ExpansionCase> for Node {
    fn from(case: ExpansionCase) -> Self {
        Node::ExpansionCase(case)
    }
}
