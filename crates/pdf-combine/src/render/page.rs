//! Output canvas rendering
//!
//! Turns the accumulated placements of one canvas into a page object of
//! the output document.

use crate::layout::{PageSize, Transform};
use crate::types::Result;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

/// Generate the PDF content stream command that draws an XObject.
pub fn placement_command(xobject_name: &str, transform: &Transform) -> String {
    let [a, b, c, d, e, f] = transform.to_matrix();
    format!(
        "q {} {} {} {} {} {} cm /{} Do Q\n",
        a, b, c, d, e, f, xobject_name
    )
}

/// Add a page of `size` to `output` that draws `content_ops` with the
/// given XObject resources.
///
/// # Arguments
/// * `output` - The output document
/// * `parent_pages_id` - The parent Pages object ID
/// * `size` - Page size in points
/// * `content_ops` - Content stream commands, one per placement
/// * `xobjects` - XObject resource dictionary referenced by the commands
/// * `compress` - Whether to Flate-compress the content stream
pub fn render_canvas(
    output: &mut Document,
    parent_pages_id: ObjectId,
    size: PageSize,
    content_ops: &[String],
    xobjects: Dictionary,
    compress: bool,
) -> Result<ObjectId> {
    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(size.width),
            Object::Real(size.height),
        ]),
    );

    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    let mut content = Stream::new(Dictionary::new(), content_ops.concat().into_bytes());
    if compress {
        content.compress()?;
    }
    let content_id = output.add_object(content);

    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    Ok(output.add_object(page_dict))
}
