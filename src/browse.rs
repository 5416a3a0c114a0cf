//! Path resolution over a navigation tree.

use crate::error::{AppError, Result};
use crate::tree::NavNode;
use log::debug;

/// Outcome of resolving a path.
///
/// Resolution never fails: on an unknown segment it stops at the deepest
/// node reached. `unmatched` records where it stopped.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution<'a> {
    pub node: &'a NavNode,
    /// Segments that matched, in order.
    pub matched: Vec<&'a str>,
    /// First segment that addressed no child.
    pub unmatched: Option<String>,
}

impl<'a> Resolution<'a> {
    pub fn is_complete(&self) -> bool {
        self.unmatched.is_none()
    }

    /// The resolved node, or `NotFound` if the path stopped early.
    pub fn into_strict(self) -> Result<&'a NavNode> {
        match self.unmatched {
            None => Ok(self.node),
            Some(segment) => Err(AppError::NotFound(format!(
                "no node '{}' below '/{}'",
                segment,
                self.matched.join("/")
            ))),
        }
    }
}

/// Resolve `path` against `root`.
///
/// `"/"` addresses the root. Other paths are split on `/` and the leading
/// segment (empty for absolute paths) is dropped before walking. Trailing
/// slashes are ignored, so `"/2/"` addresses the same node as `"/2"`.
pub fn resolve<'a>(root: &'a NavNode, path: &str) -> Resolution<'a> {
    let mut resolution = Resolution {
        node: root,
        matched: Vec::new(),
        unmatched: None,
    };

    if path == "/" {
        return resolution;
    }

    for segment in path.trim_end_matches('/').split('/').skip(1) {
        match resolution.node.child(segment) {
            Some(child) => {
                resolution.node = child;
                resolution.matched.push(child.path.as_str());
            }
            None => {
                debug!("Path '{}' stops before segment '{}'", path, segment);
                resolution.unmatched = Some(segment.to_string());
                break;
            }
        }
    }

    resolution
}

/// Address of `child` below `parent_path`, joined with a single `/`.
///
/// ```
/// use ard_aktuell::browse::child_url;
///
/// assert_eq!(child_url("/", "3"), "/3");
/// assert_eq!(child_url("/3", "latest"), "/3/latest");
/// ```
pub fn child_url(parent_path: &str, child: &str) -> String {
    format!("{}/{}", parent_path.trim_end_matches('/'), child)
}
