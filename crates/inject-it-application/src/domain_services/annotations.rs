//! Annotation Mapper
//!
//! Folds a parameter's annotations into the accessor's resolution options.

use inject_it_domain::{AnnotationToken, OptionsRecord};

/// Build the options record for one parameter's annotations
///
/// Each recognized flag annotation enables its option; repeats keep the
/// position of the first occurrence. Override and unrecognized annotations
/// contribute nothing.
pub fn map_annotations<'a, I>(annotations: I) -> OptionsRecord
where
    I: IntoIterator<Item = &'a AnnotationToken>,
{
    annotations
        .into_iter()
        .filter_map(|annotation| annotation.kind.resolution_option())
        .collect()
}
