//! A minimal XML tree: enough to find elements in document order and read their attributes.

use crate::errors::LoadError;
use std::fs::File;
use std::io::{BufReader, Read};
use std::ops::Index;
use std::path::Path;
use xml_rs::attribute::OwnedAttribute;
use xml_rs::name::OwnedName;
use xml_rs::reader::{ParserConfig, XmlEvent};

#[derive(Debug)]
pub struct Document {
    nodes: Vec<Node>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NodeId(usize);

#[derive(Debug)]
pub struct Node {
    parent: Option<NodeId>,
    next_sibling: Option<NodeId>,
    previous_sibling: Option<NodeId>,
    first_child: Option<NodeId>,
    last_child: Option<NodeId>,
    pub data: NodeData,
}

#[derive(Debug)]
pub enum NodeData {
    Document,
    Element(ElementData),
    Text(String),
    ProcessingInstruction {
        name: String,
        data: String
    },
}

#[derive(Debug)]
pub struct ElementData {
    pub name: OwnedName,
    pub attributes: Vec<OwnedAttribute>,
}

impl Document {
    pub fn parse_file<P: AsRef<Path>>(filename: P) -> Result<Self, LoadError> {
        let filename = filename.as_ref();
        let file = File::open(filename).map_err(|source| LoadError::Io {
            path: filename.to_owned(),
            source,
        })?;
        Self::parse(BufReader::new(file))
    }

    pub fn parse_str(s: &str) -> Result<Self, LoadError> {
        Self::parse(s.as_bytes())
    }

    pub fn parse<R: Read>(stream: R) -> Result<Self, LoadError> {
        let config = ParserConfig::new()
            .trim_whitespace(false)
            .whitespace_to_characters(true)
            .cdata_to_characters(true)
            .ignore_comments(true)
            .coalesce_characters(true);
        let mut document = Document {
            nodes: vec![Node::new(NodeData::Document)],
        };
        let mut current = Document::document_node_id();
        let mut ancestors = Vec::new();
        for event in config.create_reader(stream) {
            match event? {
                XmlEvent::StartElement { name, attributes, .. } => {
                    let id = document.append(current, NodeData::Element(ElementData {
                        name,
                        attributes,
                    }));
                    ancestors.push(current);
                    current = id;
                }
                XmlEvent::EndElement { .. } => {
                    // The parser rejects unbalanced end tags before we get here.
                    current = ancestors.pop().unwrap_or_else(Document::document_node_id)
                }
                XmlEvent::Characters(text) => {
                    document.append(current, NodeData::Text(text));
                }
                XmlEvent::ProcessingInstruction { name, data } => {
                    document.append(current, NodeData::ProcessingInstruction {
                        name,
                        data: data.unwrap_or_else(String::new),
                    });
                }
                _ => {}
            }
        }
        Ok(document)
    }

    pub fn document_node_id() -> NodeId {
        NodeId(0)
    }

    fn append(&mut self, parent: NodeId, data: NodeData) -> NodeId {
        let new_child = NodeId(self.nodes.len());
        let mut node = Node::new(data);
        node.parent = Some(parent);
        node.previous_sibling = self[parent].last_child;
        self.nodes.push(node);
        if let Some(former_last_child) = self[parent].last_child {
            self.nodes[former_last_child.0].next_sibling = Some(new_child);
        } else {
            debug_assert!(self[parent].first_child.is_none());
            self.nodes[parent.0].first_child = Some(new_child);
        }
        self.nodes[parent.0].last_child = Some(new_child);
        new_child
    }

    /// All nodes except the document node itself, in tree order.
    pub fn descendants(&self) -> Descendants {
        Descendants {
            document: self,
            next: self[Document::document_node_id()].first_child,
        }
    }

    /// All elements, in tree order.
    pub fn elements(&self) -> impl Iterator<Item=(NodeId, &ElementData)> {
        self.descendants().filter_map(move |id| self[id].element_data().map(|e| (id, e)))
    }
}

impl Index<NodeId> for Document {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}

macro_rules! link_getters {
    ($($link: ident),+) => {
        $(
            #[inline] pub fn $link(&self) -> Option<NodeId> { self.$link }
        )+
    }
}

impl Node {
    fn new(data: NodeData) -> Self {
        Node {
            parent: None,
            previous_sibling: None,
            next_sibling: None,
            first_child: None,
            last_child: None,
            data,
        }
    }

    link_getters!(parent, previous_sibling, next_sibling, first_child, last_child);

    pub fn element_data(&self) -> Option<&ElementData> {
        match self.data {
            NodeData::Element(ref e) => Some(e),
            _ => None,
        }
    }
}

impl ElementData {
    pub fn local_name(&self) -> &str {
        &self.name.local_name
    }

    /// Local names and values, in source order.
    pub fn attributes(&self) -> impl Iterator<Item=(&str, &str)> {
        self.attributes.iter().map(|a| (&*a.name.local_name, &*a.value))
    }

    pub fn attribute(&self, local_name: &str) -> Option<&str> {
        self.attributes().find(|&(name, _)| name == local_name).map(|(_, value)| value)
    }
}

pub struct Descendants<'doc> {
    document: &'doc Document,
    next: Option<NodeId>,
}

impl<'doc> Iterator for Descendants<'doc> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.next?;
        let document = self.document;
        self.next = document[id].first_child().or_else(|| {
            let mut ancestor = Some(id);
            while let Some(a) = ancestor {
                if a == Document::document_node_id() {
                    return None
                }
                if let Some(sibling) = document[a].next_sibling() {
                    return Some(sibling)
                }
                ancestor = document[a].parent()
            }
            None
        });
        Some(id)
    }
}
