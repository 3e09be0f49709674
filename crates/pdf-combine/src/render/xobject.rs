//! XObject creation from source pages
//!
//! This module handles creating Form XObjects from source PDF pages,
//! which are then drawn onto output canvases with a transformation.

use crate::layout::PageSize;
use crate::types::{CombineError, Result};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

/// Page attributes may be inherited through at most this many `Parent` links
const MAX_INHERITANCE_DEPTH: usize = 32;

// =============================================================================
// XObject Creation
// =============================================================================

/// Create an XObject from a source page.
///
/// Objects reachable from the page's resources are copied into `output`
/// once per `cache`; pass the same cache for pages of the same source
/// document that end up on the same canvas.
///
/// # Arguments
/// * `output` - The output document to add the XObject to
/// * `source` - The source document containing the page
/// * `page_id` - The object ID of the source page
/// * `cache` - Source to output object ID map for already copied objects
pub fn create_page_xobject(
    output: &mut Document,
    source: &Document,
    page_id: ObjectId,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<ObjectId> {
    let page_dict = source.get_dictionary(page_id)?;

    let media_box = inherited_attribute(source, page_id, b"MediaBox")?.ok_or_else(|| {
        CombineError::InvalidPage(format!("page {:?} has no MediaBox", page_id))
    })?;
    let media_box = resolve(source, media_box)?.as_array()?.clone();

    let (origin_x, origin_y) = media_box_origin(&media_box);

    let content_data = get_page_content(source, page_dict)?;

    let mut xobject_dict = Dictionary::new();
    xobject_dict.set("Type", Object::Name(b"XObject".to_vec()));
    xobject_dict.set("Subtype", Object::Name(b"Form".to_vec()));
    xobject_dict.set("BBox", Object::Array(media_box));
    xobject_dict.set("FormType", Object::Integer(1));
    // Move the MediaBox's lower-left corner to the form origin, which is
    // where placements put the page.
    if origin_x != 0.0 || origin_y != 0.0 {
        xobject_dict.set(
            "Matrix",
            Object::Array(vec![
                Object::Integer(1),
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(1),
                Object::Real(-origin_x),
                Object::Real(-origin_y),
            ]),
        );
    }

    if let Some(resources) = inherited_attribute(source, page_id, b"Resources")? {
        xobject_dict.set(
            "Resources",
            copy_object_deep(output, source, resources, cache)?,
        );
    }

    Ok(output.add_object(Stream::new(xobject_dict, content_data)))
}

// =============================================================================
// Page Attributes
// =============================================================================

/// Look up a page attribute, following `Parent` links for inheritable keys.
fn inherited_attribute<'a>(
    doc: &'a Document,
    page_id: ObjectId,
    key: &[u8],
) -> Result<Option<&'a Object>> {
    let mut node = doc.get_dictionary(page_id)?;

    for _ in 0..MAX_INHERITANCE_DEPTH {
        if let Ok(value) = node.get(key) {
            return Ok(Some(value));
        }
        match node.get(b"Parent") {
            Ok(Object::Reference(parent_id)) => node = doc.get_dictionary(*parent_id)?,
            _ => return Ok(None),
        }
    }

    Ok(None)
}

/// Follow a reference to the object it points at.
fn resolve<'a>(doc: &'a Document, obj: &'a Object) -> Result<&'a Object> {
    match obj {
        Object::Reference(id) => Ok(doc.get_object(*id)?),
        _ => Ok(obj),
    }
}

/// Get source page size in points from its (possibly inherited) MediaBox.
pub fn get_page_size(doc: &Document, page_id: ObjectId) -> Result<PageSize> {
    let invalid =
        |reason: &str| CombineError::InvalidPage(format!("page {:?}: {}", page_id, reason));

    let media_box = inherited_attribute(doc, page_id, b"MediaBox")?
        .ok_or_else(|| invalid("no MediaBox"))?;
    let coords: Vec<f32> = resolve(doc, media_box)?
        .as_array()?
        .iter()
        .filter_map(extract_number)
        .collect();

    let [x0, y0, x1, y1] = coords[..] else {
        return Err(invalid("MediaBox is not four numbers"));
    };

    let size = PageSize::new((x1 - x0).abs(), (y1 - y0).abs());
    if size.width <= 0.0 || size.height <= 0.0 {
        return Err(invalid("MediaBox has zero area"));
    }
    Ok(size)
}

/// Lower-left corner of a MediaBox array
fn media_box_origin(media_box: &[Object]) -> (f32, f32) {
    let coords: Vec<f32> = media_box.iter().filter_map(extract_number).collect();
    match coords[..] {
        [x0, y0, x1, y1] => (x0.min(x1), y0.min(y1)),
        _ => (0.0, 0.0),
    }
}

/// Extract numeric value from a PDF object
fn extract_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}

// =============================================================================
// Page Content Extraction
// =============================================================================

/// Get the content stream data from a page.
fn get_page_content(doc: &Document, page_dict: &Dictionary) -> Result<Vec<u8>> {
    let contents = match page_dict.get(b"Contents") {
        Ok(c) => c,
        Err(_) => return Ok(Vec::new()), // No content = blank page
    };

    match contents {
        Object::Reference(id) => match doc.get_object(*id)? {
            Object::Array(arr) => get_concatenated_content_streams(doc, arr),
            _ => get_single_content_stream(doc, *id),
        },
        Object::Array(arr) => get_concatenated_content_streams(doc, arr),
        _ => Ok(Vec::new()),
    }
}

/// Get content from a single content stream reference
fn get_single_content_stream(doc: &Document, id: ObjectId) -> Result<Vec<u8>> {
    if let Ok(stream) = doc.get_object(id)?.as_stream() {
        Ok(stream
            .decompressed_content()
            .unwrap_or_else(|_| stream.content.clone()))
    } else {
        Ok(Vec::new())
    }
}

/// Concatenate multiple content streams
fn get_concatenated_content_streams(doc: &Document, refs: &[Object]) -> Result<Vec<u8>> {
    let mut result = Vec::new();

    for obj in refs {
        if let Object::Reference(id) = obj {
            result.extend_from_slice(&get_single_content_stream(doc, *id)?);
            result.push(b'\n');
        }
    }

    Ok(result)
}

// =============================================================================
// Deep Copy
// =============================================================================

/// Deep copy an object from source to output document, following references.
///
/// Uses a cache to avoid copying the same object multiple times.
pub fn copy_object_deep(
    output: &mut Document,
    source: &Document,
    obj: &Object,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Object> {
    match obj {
        Object::Reference(id) => {
            if let Some(&new_id) = cache.get(id) {
                return Ok(Object::Reference(new_id));
            }

            // Reserve the ID first so reference cycles resolve to it
            let new_id = output.new_object_id();
            cache.insert(*id, new_id);

            let referenced = source.get_object(*id)?;
            let copied = copy_object_deep(output, source, referenced, cache)?;
            output.objects.insert(new_id, copied);

            Ok(Object::Reference(new_id))
        }
        Object::Dictionary(dict) => {
            let mut new_dict = Dictionary::new();
            for (key, value) in dict.iter() {
                new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
            }
            Ok(Object::Dictionary(new_dict))
        }
        Object::Array(arr) => {
            let new_arr: Result<Vec<_>> = arr
                .iter()
                .map(|item| copy_object_deep(output, source, item, cache))
                .collect();
            Ok(Object::Array(new_arr?))
        }
        Object::Stream(stream) => {
            let mut new_dict = Dictionary::new();
            for (key, value) in stream.dict.iter() {
                new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
            }
            Ok(Object::Stream(Stream {
                dict: new_dict,
                content: stream.content.clone(),
                allows_compression: stream.allows_compression,
                start_position: None,
            }))
        }
        // Primitive types: just clone
        _ => Ok(obj.clone()),
    }
}
