use std::collections::HashMap;

use crate::models::{Comment, Content, Post, Ticker};
use crate::types::{CommentIndexMap, PostIndexMap};
use crate::utils::unique_lowercase_words;

/// Inverted word indexes over one corpus snapshot.
///
/// Built once per load and borrows the post and comment collections it was
/// built from. Bucket order is the order items appeared in the input slices;
/// no sort is applied.
#[derive(Debug)]
pub struct ContentIndex<'a> {
    pub post_index: PostIndexMap<'a>,
    pub comment_index: CommentIndexMap<'a>,
}

impl<'a> ContentIndex<'a> {
    pub fn new(posts: &'a [Post], comments: &'a [Comment]) -> Self {
        let mut post_index: PostIndexMap<'a> = HashMap::new();
        let mut comment_index: CommentIndexMap<'a> = HashMap::new();

        for post in posts {
            // Union of title and body words, so a word present in both fields
            // links the post once.
            let mut words = unique_lowercase_words(&post.title);
            words.extend(unique_lowercase_words(&post.body));

            for word in words {
                post_index.entry(word).or_default().push(post);
            }
        }

        for comment in comments {
            for word in unique_lowercase_words(&comment.content) {
                comment_index.entry(word).or_default().push(comment);
            }
        }

        ContentIndex {
            post_index,
            comment_index,
        }
    }

    /// Every post containing `word`, or `None` when the word never occurs.
    pub fn posts_for(&self, word: &str) -> Option<&[&'a Post]> {
        self.post_index.get(word).map(Vec::as_slice)
    }

    /// Every comment containing `word`, or `None` when the word never occurs.
    pub fn comments_for(&self, word: &str) -> Option<&[&'a Comment]> {
        self.comment_index.get(word).map(Vec::as_slice)
    }

    /// Attaches every post and comment mentioning `ticker`'s symbol to its
    /// reference list, posts first. Matches already present on the ticker are
    /// skipped; a symbol found in neither index leaves the list untouched.
    pub fn attach_references_to(&self, ticker: &mut Ticker) {
        let symbol = ticker.symbol.to_lowercase();

        if let Some(posts) = self.posts_for(&symbol) {
            for post in posts {
                ticker.attach_reference(Content::Post((*post).clone()));
            }
        }

        if let Some(comments) = self.comments_for(&symbol) {
            for comment in comments {
                ticker.attach_reference(Content::Comment((*comment).clone()));
            }
        }
    }
}
