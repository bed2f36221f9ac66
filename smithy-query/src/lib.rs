/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Abstractions for the Smithy AWS Query protocol

use smithy_types::instant::Format;
use smithy_types::{Instant, Number};
use std::borrow::Cow;
use urlencoding::encode;

/// Writes the `Action` and `Version` of an AWS Query request, then hands out value writers for
/// each top-level member.
pub struct QueryWriter<'a> {
    output: &'a mut String,
}

impl<'a> QueryWriter<'a> {
    pub fn new(output: &'a mut String, action: &str, version: &str) -> Self {
        output.push_str("Action=");
        output.push_str(&encode(action));
        output.push_str("&Version=");
        output.push_str(&encode(version));
        QueryWriter { output }
    }

    pub fn prefix(&mut self, prefix: &'a str) -> QueryValueWriter {
        QueryValueWriter::new(self.output, Cow::Borrowed(prefix))
    }

    pub fn finish(self) {
        // Calling this drops self
    }
}

/// Writes a list. Member indices start at 1.
#[must_use]
pub struct QueryListWriter<'a> {
    output: &'a mut String,
    prefix: Cow<'a, str>,
    flat: bool,
    member_override: Option<&'a str>,
    next_index: usize,
}

impl<'a> QueryListWriter<'a> {
    fn new(
        output: &'a mut String,
        prefix: Cow<'a, str>,
        flat: bool,
        member_override: Option<&'a str>,
    ) -> Self {
        QueryListWriter {
            output,
            prefix,
            flat,
            member_override,
            next_index: 1,
        }
    }

    pub fn entry(&mut self) -> QueryValueWriter {
        let prefix = if self.flat {
            format!("{}.{}", self.prefix, self.next_index)
        } else {
            format!(
                "{}.{}.{}",
                self.prefix,
                self.member_override.unwrap_or("member"),
                self.next_index
            )
        };
        self.next_index += 1;
        QueryValueWriter::new(self.output, Cow::Owned(prefix))
    }

    /// An empty list is still sent so that the service can tell it apart from an absent one
    pub fn finish(self) {
        if self.next_index == 1 {
            QueryValueWriter::new(self.output, self.prefix).write_param_name();
        }
    }
}

/// Writes a map as `key`/`value` pairs. Entry indices start at 1.
#[must_use]
pub struct QueryMapWriter<'a> {
    output: &'a mut String,
    prefix: Cow<'a, str>,
    flat: bool,
    key_name: &'a str,
    value_name: &'a str,
    next_index: usize,
}

impl<'a> QueryMapWriter<'a> {
    fn new(
        output: &'a mut String,
        prefix: Cow<'a, str>,
        flat: bool,
        key_name: &'a str,
        value_name: &'a str,
    ) -> Self {
        QueryMapWriter {
            output,
            prefix,
            flat,
            key_name,
            value_name,
            next_index: 1,
        }
    }

    pub fn entry(&mut self, key: &str) -> QueryValueWriter {
        let entry = if self.flat { "" } else { ".entry" };
        self.output.push_str(&format!(
            "&{}{}.{}.{}={}",
            self.prefix,
            entry,
            self.next_index,
            self.key_name,
            encode(key)
        ));
        let value_name = format!(
            "{}{}.{}.{}",
            self.prefix, entry, self.next_index, self.value_name
        );

        self.next_index += 1;
        QueryValueWriter::new(self.output, Cow::Owned(value_name))
    }

    pub fn finish(self) {
        // Calling this drops self
    }
}

/// Writes one query parameter (or, for aggregates, the parameters nested under its name)
#[must_use]
pub struct QueryValueWriter<'a> {
    output: &'a mut String,
    prefix: Cow<'a, str>,
}

impl<'a> QueryValueWriter<'a> {
    pub fn new(output: &'a mut String, prefix: Cow<'a, str>) -> QueryValueWriter<'a> {
        QueryValueWriter { output, prefix }
    }

    /// Starts a new prefix nested under the current one
    pub fn prefix(&mut self, prefix: &'a str) -> QueryValueWriter {
        QueryValueWriter::new(
            self.output,
            Cow::Owned(format!("{}.{}", self.prefix, prefix)),
        )
    }

    pub fn boolean(mut self, value: bool) {
        self.write_param_name();
        self.output.push_str(if value { "true" } else { "false" });
    }

    pub fn string(mut self, value: &str) {
        self.write_param_name();
        self.output.push_str(&encode(value));
    }

    pub fn number(mut self, value: Number) {
        self.write_param_name();
        match value {
            Number::PosInt(value) => self.output.push_str(&value.to_string()),
            Number::NegInt(value) => self.output.push_str(&value.to_string()),
            Number::Float(value) => self.output.push_str(&fmt_float(value)),
        }
    }

    pub fn instant(mut self, instant: &Instant, format: Format) {
        self.write_param_name();
        self.output.push_str(&encode(&instant.fmt(format)));
    }

    pub fn start_list(self, flat: bool, member_override: Option<&'a str>) -> QueryListWriter<'a> {
        QueryListWriter::new(self.output, self.prefix, flat, member_override)
    }

    pub fn start_map(
        self,
        flat: bool,
        key_name: &'a str,
        value_name: &'a str,
    ) -> QueryMapWriter<'a> {
        QueryMapWriter::new(self.output, self.prefix, flat, key_name, value_name)
    }

    fn write_param_name(&mut self) {
        self.output.push('&');
        self.output.push_str(&self.prefix);
        self.output.push('=');
    }
}

fn fmt_float(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_negative() {
            "-Infinity".to_string()
        } else {
            "Infinity".to_string()
        }
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::QueryWriter;
    use smithy_types::instant::Format;
    use smithy_types::{Instant, Number};

    #[test]
    fn no_params() {
        let mut out = String::new();
        let writer = QueryWriter::new(&mut out, "SomeAction", "1.0");
        writer.finish();
        assert_eq!("Action=SomeAction&Version=1.0", out);
    }

    #[test]
    fn query_list_writer_empty_list() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "SomeAction", "1.0");
        writer.prefix("SomeList").start_list(false, None).finish();
        writer.finish();
        assert_eq!("Action=SomeAction&Version=1.0&SomeList=", out);
    }

    #[test]
    fn maps() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "CreateTopic", "2010-03-31");

        let mut map = writer.prefix("Attributes").start_map(false, "key", "value");
        map.entry("DisplayName").string("my topic");
        map.entry("FifoTopic").boolean(false);
        map.finish();

        let mut flat = writer.prefix("Flat").start_map(true, "Name", "Value");
        flat.entry("first").string("1");
        flat.finish();
        writer.finish();

        assert_eq!(
            "Action=CreateTopic&Version=2010-03-31\
            &Attributes.entry.1.key=DisplayName&Attributes.entry.1.value=my%20topic\
            &Attributes.entry.2.key=FifoTopic&Attributes.entry.2.value=false\
            &Flat.1.Name=first&Flat.1.Value=1",
            out
        );
    }

    #[test]
    fn lists() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "CreateCluster", "2012-12-01");

        let mut list = writer
            .prefix("VpcSecurityGroupIds")
            .start_list(false, Some("VpcSecurityGroupId"));
        list.entry().string("sg-1");
        list.entry().string("sg-2");
        list.finish();

        let mut tags = writer.prefix("Tags").start_list(false, Some("Tag"));
        let mut tag = tags.entry();
        tag.prefix("Key").string("team");
        tag.prefix("Value").string("storage & data");
        tags.finish();

        let mut flat = writer.prefix("Flat").start_list(true, None);
        flat.entry().number(Number::PosInt(5));
        flat.finish();
        writer.finish();

        assert_eq!(
            "Action=CreateCluster&Version=2012-12-01\
            &VpcSecurityGroupIds.VpcSecurityGroupId.1=sg-1\
            &VpcSecurityGroupIds.VpcSecurityGroupId.2=sg-2\
            &Tags.Tag.1.Key=team&Tags.Tag.1.Value=storage%20%26%20data\
            &Flat.1=5",
            out
        );
    }

    #[test]
    fn scalars() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "SomeAction", "1.0");
        writer.prefix("PosInt").number(Number::PosInt(5));
        writer.prefix("NegInt").number(Number::NegInt(-5));
        writer.prefix("Infinity").number(Number::Float(f64::INFINITY));
        writer.prefix("NegInfinity").number(Number::Float(f64::NEG_INFINITY));
        writer.prefix("NaN").number(Number::Float(f64::NAN));
        writer.prefix("Float").number(Number::Float(0.5));
        writer
            .prefix("Instant")
            .instant(&Instant::from_epoch_seconds(1576540098), Format::DateTime);
        writer.finish();
        assert_eq!(
            "Action=SomeAction&Version=1.0\
            &PosInt=5&NegInt=-5&Infinity=Infinity&NegInfinity=-Infinity&NaN=NaN&Float=0.5\
            &Instant=2019-12-16T23%3A48%3A18Z",
            out
        );
    }
}
