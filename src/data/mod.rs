//! Sample data standing in for a backend.

pub mod models;
pub mod providers;

pub use models::{
    ImageRef, Notification, NotificationId, Place, PlaceId, Post, PostId, Profile, Review,
    ReviewId, MAX_RATING,
};
pub use providers::{notifications, places, posts, profile, reviews};

use anyhow::Result;
use serde::Serialize;

/// Which provider to dump from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DataKind {
    Posts,
    Places,
    Reviews,
    Profile,
    Notifications,
}

/// Serialize a provider's output as JSON
pub fn dump(kind: DataKind) -> Result<serde_json::Value> {
    fn to_value<T: Serialize>(value: T) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(value)?)
    }

    match kind {
        DataKind::Posts => to_value(posts()),
        DataKind::Places => to_value(places()),
        DataKind::Reviews => to_value(reviews()),
        DataKind::Profile => to_value(profile()),
        DataKind::Notifications => to_value(notifications()),
    }
}

/// Human-readable listing of a provider's output, one line per record
pub fn describe(kind: DataKind) -> Vec<String> {
    match kind {
        DataKind::Posts => posts()
            .into_iter()
            .map(|p| {
                format!(
                    "#{} {} @ {} ({} likes, {} comments)",
                    p.id, p.author, p.location, p.likes, p.comments
                )
            })
            .collect(),
        DataKind::Places => places()
            .into_iter()
            .map(|p| format!("#{} {}", p.id, p.location))
            .collect(),
        DataKind::Reviews => reviews()
            .into_iter()
            .map(|r| {
                format!(
                    "#{} {} {}/{} ({} likes): {}",
                    r.id,
                    r.author,
                    r.rating,
                    MAX_RATING,
                    r.likes,
                    r.comment.replace('\n', " ")
                )
            })
            .collect(),
        DataKind::Profile => {
            let p = profile();
            let photos: Vec<&str> = p.photos.iter().map(ImageRef::label).collect();
            vec![
                format!("{} {}", p.name, p.handle),
                format!("photos: {}", photos.join(", ")),
            ]
        }
        DataKind::Notifications => notifications()
            .into_iter()
            .map(|n| format!("#{} {} {} {}", n.id, n.user_name, n.action, n.time))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dump_posts_is_an_array() {
        let value = dump(DataKind::Posts).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 4);
        assert_eq!(array[1]["author"], "Mateo Ruiz");
        assert_eq!(array[1]["image"], "cartagena");
    }

    #[test]
    fn test_dump_profile_is_an_object() {
        let value = dump(DataKind::Profile).unwrap();
        assert_eq!(value["handle"], "@Camilo_co");
    }

    #[test]
    fn test_describe_flattens_multiline_comments() {
        let lines = describe(DataKind::Reviews);
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| !l.contains('\n')));
        assert!(lines[0].starts_with("#1 Maria Valen 5/5"));
    }
}
