use serde::Serialize;

/// An uploaded file as received from the surface layer: name plus the
/// best-effort plain text the client-side extraction produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttachedFile {
    pub name: String,
    pub content: String,
}

/// A source document reduced for prompt embedding: bounded excerpt plus the
/// title derived from first-line heuristics (file name stem as fallback).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceDocument {
    pub name: String,
    pub title: String,
    pub excerpt: String,
}
