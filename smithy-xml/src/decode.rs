/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! A small element tree for reading AWS Query responses.
//!
//! Namespace prefixes are dropped: `<ns:Foo>` is reported as `Foo`.

use crate::unescape::unescape;
use std::borrow::Cow;
use std::str::FromStr;
use thiserror::Error;
use xmlparser::{ElementEnd, Token, Tokenizer};

#[derive(Debug, Error)]
pub enum XmlError {
    #[error("invalid XML: {0}")]
    InvalidXml(#[from] xmlparser::Error),

    #[error("invalid XML escape: {esc}")]
    InvalidEscape { esc: String },

    #[error("mismatched closing tag: expected `{expected}`, found `{found}`")]
    MismatchedTag { expected: String, found: String },

    #[error("unexpected end of document")]
    UnexpectedEof,

    #[error("{0}")]
    Custom(Cow<'static, str>),
}

impl XmlError {
    pub fn custom(msg: impl Into<Cow<'static, str>>) -> Self {
        XmlError::Custom(msg.into())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
    text: String,
}

impl Element {
    fn new(name: &str) -> Self {
        Element {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter()
    }

    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Text content of this element with surrounding whitespace removed
    pub fn text(&self) -> &str {
        self.text.trim()
    }

    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).map(|child| child.text())
    }

    /// Parse the text of the child `name`, if present
    pub fn parse_child<T>(&self, name: &str) -> Result<Option<T>, XmlError>
    where
        T: FromStr,
    {
        match self.child_text(name) {
            None => Ok(None),
            Some(text) => T::from_str(text).map(Some).map_err(|_| {
                XmlError::custom(format!("`{}` is not a valid value for <{}>", text, name))
            }),
        }
    }

    /// Like [`child`](Element::child) but a missing element is an error
    pub fn expect_child(&self, name: &str) -> Result<&Element, XmlError> {
        self.child(name).ok_or_else(|| {
            XmlError::custom(format!("<{}> is missing child <{}>", self.name, name))
        })
    }
}

pub struct Document;

impl Document {
    /// Parse `doc` into its root element
    pub fn parse(doc: &str) -> Result<Element, XmlError> {
        let mut stack: Vec<Element> = Vec::new();
        let mut root = None;
        for token in Tokenizer::from(doc) {
            match token? {
                Token::ElementStart { local, .. } => {
                    if root.is_some() {
                        return Err(XmlError::custom("document has more than one root element"));
                    }
                    stack.push(Element::new(local.as_str()))
                }
                Token::Attribute { local, value, .. } => {
                    let element = stack.last_mut().ok_or(XmlError::UnexpectedEof)?;
                    element
                        .attributes
                        .push((local.to_string(), unescape(value.as_str())?.into_owned()));
                }
                Token::ElementEnd { end, .. } => {
                    let closed = match end {
                        ElementEnd::Open => continue,
                        ElementEnd::Empty => stack.pop(),
                        ElementEnd::Close(_, local) => {
                            let element = stack.pop();
                            if let Some(element) = &element {
                                if element.name != local.as_str() {
                                    return Err(XmlError::MismatchedTag {
                                        expected: element.name.clone(),
                                        found: local.to_string(),
                                    });
                                }
                            }
                            element
                        }
                    };
                    let closed = closed.ok_or(XmlError::UnexpectedEof)?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(closed),
                        None => root = Some(closed),
                    }
                }
                Token::Text { text } => {
                    if let Some(element) = stack.last_mut() {
                        element.text.push_str(&unescape(text.as_str())?);
                    }
                }
                Token::Cdata { text, .. } => {
                    if let Some(element) = stack.last_mut() {
                        element.text.push_str(text.as_str());
                    }
                }
                _ => {}
            }
        }
        if !stack.is_empty() {
            return Err(XmlError::UnexpectedEof);
        }
        root.ok_or(XmlError::UnexpectedEof)
    }
}
