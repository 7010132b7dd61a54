use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use log::debug;
use serde::Deserialize;

use crate::constants::{AUTO_MOD_MARKER, REMOVED_BODY_MARKER};
use crate::models::{Comment, Error, Post};
use crate::types::Timestamp;
use crate::utils::{collapse_whitespace, strip_emojis};

/// Raw post record as it appears in the line-delimited JSON dump.
#[derive(Deserialize)]
struct RawPostRecord {
    title: String,
    selftext: String,
    num_comments: u32,
    created: f64,
}

/// Raw comment record as it appears in the line-delimited JSON dump.
#[derive(Deserialize)]
struct RawCommentRecord {
    body: String,
    created: f64,
}

/// Reads one post per line from a JSONL stream.
///
/// Titles and bodies are whitespace-collapsed and scrubbed of emojis before
/// the post is constructed. Records repeating an already-seen
/// `(title, body, time)` identity collapse to a single post.
pub fn read_posts_from_jsonl<R: Read>(reader: R) -> Result<Vec<Post>, Error> {
    let mut seen: HashSet<Post> = HashSet::new();
    let mut posts: Vec<Post> = Vec::new();

    for line in BufReader::new(reader).lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let record: RawPostRecord = serde_json::from_str(&line)?;

        let post = Post {
            // Strip before collapsing so removed emojis don't leave double spaces
            title: collapse_whitespace(&strip_emojis(&record.title)),
            body: collapse_whitespace(&strip_emojis(&record.selftext)),
            num_comments: record.num_comments,
            time: record.created as Timestamp,
        };

        if seen.insert(post.clone()) {
            posts.push(post);
        }
    }

    debug!("Loaded {} unique posts", posts.len());

    Ok(posts)
}

/// Reads one comment per line from a JSONL stream.
///
/// Bodies are whitespace-collapsed. Removed comments and the auto-moderator
/// boilerplate are skipped; records repeating an already-seen
/// `(content, time)` identity collapse to a single comment.
pub fn read_comments_from_jsonl<R: Read>(reader: R) -> Result<Vec<Comment>, Error> {
    let mut seen: HashSet<Comment> = HashSet::new();
    let mut comments: Vec<Comment> = Vec::new();

    for line in BufReader::new(reader).lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let record: RawCommentRecord = serde_json::from_str(&line)?;

        let body = collapse_whitespace(&record.body);
        if body == REMOVED_BODY_MARKER {
            continue;
        }
        if body.contains(AUTO_MOD_MARKER) {
            continue;
        }

        let comment = Comment {
            content: body,
            time: record.created as Timestamp,
        };

        if seen.insert(comment.clone()) {
            comments.push(comment);
        }
    }

    debug!("Loaded {} unique comments", comments.len());

    Ok(comments)
}

/// Opens `path` for [`read_posts_from_jsonl`], transparently decompressing
/// `.gz` dumps.
pub fn read_posts_from_jsonl_path<P: AsRef<Path>>(path: P) -> Result<Vec<Post>, Error> {
    let path = path.as_ref();
    let file = File::open(path)?;

    if is_gzip_path(path) {
        read_posts_from_jsonl(GzDecoder::new(file))
    } else {
        read_posts_from_jsonl(file)
    }
}

/// Opens `path` for [`read_comments_from_jsonl`], transparently decompressing
/// `.gz` dumps.
pub fn read_comments_from_jsonl_path<P: AsRef<Path>>(path: P) -> Result<Vec<Comment>, Error> {
    let path = path.as_ref();
    let file = File::open(path)?;

    if is_gzip_path(path) {
        read_comments_from_jsonl(GzDecoder::new(file))
    } else {
        read_comments_from_jsonl(file)
    }
}

fn is_gzip_path(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "gz")
}
