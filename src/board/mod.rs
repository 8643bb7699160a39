//! Board module for Postboard.
//!
//! This module provides the bulletin board content:
//! - Posts (create, read, update, delete, list)
//! - Comments attached to posts
//! - Fixed-size 1-based pagination for every listing
//! - Owner-or-admin checks for mutations via [`BoardService`]

mod comment;
mod comment_repository;
mod page;
mod post;
mod post_repository;
mod service;

pub use comment::{Comment, NewComment};
pub use comment_repository::CommentRepository;
pub use page::{Page, PAGE_SIZE};
pub use post::{NewPost, Post, PostUpdate};
pub use post_repository::PostRepository;
pub use service::BoardService;
