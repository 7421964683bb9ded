//! RSS 2.0 output generation.
//!
//! Renders the assembled feed as an RSS 2.0 document. Plain fields are
//! written as escaped text; the article body is emitted as a CDATA section
//! so the raw HTML fragment survives untouched.

use crate::models::Feed;
use chrono::Local;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::error::Error;
use std::io::Cursor;
use tracing::debug;

/// Render a [`Feed`] as an RSS 2.0 XML document.
///
/// One `<item>` per article with `title`, `link`, `author`, `category`,
/// a permalink `guid`, and the body HTML inside `<description>` as CDATA.
/// `lastBuildDate` is the render time in RFC 2822 format.
pub fn render(feed: &Feed) -> Result<String, Box<dyn Error>> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    let mut rss = BytesStart::new("rss");
    rss.push_attribute(("version", "2.0"));
    writer.write_event(Event::Start(rss))?;
    writer.write_event(Event::Start(BytesStart::new("channel")))?;

    text_element(&mut writer, "title", &feed.title)?;
    text_element(&mut writer, "link", &feed.link)?;
    text_element(&mut writer, "description", &feed.title)?;
    text_element(&mut writer, "lastBuildDate", &Local::now().to_rfc2822())?;

    for article in &feed.items {
        writer.write_event(Event::Start(BytesStart::new("item")))?;
        text_element(&mut writer, "title", &article.title)?;
        text_element(&mut writer, "link", &article.link)?;
        text_element(&mut writer, "author", &article.author)?;
        text_element(&mut writer, "category", &article.category)?;

        let mut guid = BytesStart::new("guid");
        guid.push_attribute(("isPermaLink", "true"));
        writer.write_event(Event::Start(guid))?;
        writer.write_event(Event::Text(BytesText::new(&article.link)))?;
        writer.write_event(Event::End(BytesEnd::new("guid")))?;

        writer.write_event(Event::Start(BytesStart::new("description")))?;
        writer.write_event(Event::CData(BytesCData::new(article.description.as_str())))?;
        writer.write_event(Event::End(BytesEnd::new("description")))?;

        writer.write_event(Event::End(BytesEnd::new("item")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("channel")))?;
    writer.write_event(Event::End(BytesEnd::new("rss")))?;

    let xml = String::from_utf8(writer.into_inner().into_inner())?;
    debug!(bytes = xml.len(), items = feed.items.len(), "Rendered RSS");
    Ok(xml)
}

fn text_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    tag: &str,
    text: &str,
) -> Result<(), Box<dyn Error>> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}
