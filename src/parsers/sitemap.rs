use quick_xml::events::Event;
use quick_xml::Reader;

/// Extracts the `<url><loc>` value of every sitemap entry, in document order.
///
/// Only the first `loc` directly under a `url` counts, so nested extension
/// entries such as `<image:image><image:loc>` are skipped. Malformed XML ends
/// the scan early; whatever was read up to that point is returned.
pub fn parse_sitemap(xml: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    let mut locations = Vec::new();
    let mut depth = 0usize;
    // depth of the open <url> and whether it already produced a location
    let mut url: Option<(usize, bool)> = None;
    let mut loc: Option<String> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                depth += 1;
                match e.local_name().as_ref() {
                    b"url" => url = Some((depth, false)),
                    b"loc" if url == Some((depth - 1, false)) => loc = Some(String::new()),
                    _ => {}
                }
            }
            Ok(Event::Text(e)) => {
                if let Some(current) = loc.as_mut() {
                    match e.unescape() {
                        Ok(text) => current.push_str(&text),
                        Err(err) => {
                            ::log::warn!("Skipping undecodable sitemap text: {}", err);
                        }
                    }
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(current) = loc.as_mut() {
                    current.push_str(&String::from_utf8_lossy(&e));
                }
            }
            Ok(Event::End(e)) => {
                match e.local_name().as_ref() {
                    b"loc" => {
                        if let Some(value) = loc.take() {
                            let value = value.trim();
                            if !value.is_empty() {
                                locations.push(value.to_string());
                                if let Some((_, seen)) = url.as_mut() {
                                    *seen = true;
                                }
                            }
                        }
                    }
                    b"url" => url = None,
                    _ => {}
                }
                depth = depth.saturating_sub(1);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                ::log::warn!(
                    "Malformed sitemap at byte {}: {}",
                    reader.buffer_position(),
                    e
                );
                break;
            }
            _ => {}
        }
    }

    ::log::debug!("Sitemap yielded {} locations", locations.len());
    locations
}
