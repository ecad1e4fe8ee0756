//! Static sample data.
//!
//! Each provider builds a fresh value on every call and always returns the
//! same literals. Screens read them once when they mount.

use super::models::{
    ImageRef, Notification, NotificationId, Place, PlaceId, Post, PostId, Profile, Review,
    ReviewId,
};

fn post(id: u32, author: &str, location: &str, image: ImageRef, likes: &str, comments: &str) -> Post {
    Post {
        id: PostId(id),
        author: author.to_string(),
        location: location.to_string(),
        image,
        likes: likes.to_string(),
        comments: comments.to_string(),
    }
}

/// Posts for the home feed
pub fn posts() -> Vec<Post> {
    vec![
        post(1, "Alejandra Gomez", "Valle del Cocora", ImageRef::ValleDelCocora, "1.2k", "58"),
        post(2, "Mateo Ruiz", "Cartagena Old City", ImageRef::Cartagena, "980", "30"),
        post(3, "Sofia Lopez", "Santa Marta", ImageRef::SantaMarta, "750", "42"),
        post(4, "Carlos Perez", "Medellín", ImageRef::Medellin, "1.5k", "65"),
    ]
}

/// Places recommended on the explore screen
pub fn places() -> Vec<Place> {
    [
        ImageRef::Cartagena,
        ImageRef::ValleDelCocora,
        ImageRef::SantaMarta,
        ImageRef::Medellin,
        ImageRef::Atardecer,
        ImageRef::Catedral,
    ]
    .into_iter()
    .zip(1..)
    .map(|(image, id)| Place {
        id: PlaceId(id),
        image,
        location: image.label().to_string(),
    })
    .collect()
}

/// Community reviews shown on a place's detail screen
pub fn reviews() -> Vec<Review> {
    vec![
        Review::new(
            ReviewId(1),
            "Maria Valen",
            5,
            "Category • $$ • 1.2 miles away\nSupporting line text lorem ipsum...",
            12,
        ),
        Review::new(
            ReviewId(2),
            "Juan Perez",
            4,
            "Un lugar increíble para visitar en familia.",
            5,
        ),
        Review::new(ReviewId(3), "Sofia Gomez", 5, "Las mejores vistas de Colombia.", 8),
    ]
}

/// The signed-in traveller
pub fn profile() -> Profile {
    Profile {
        name: "Camilo Jiménez".to_string(),
        handle: "@Camilo_co".to_string(),
        avatar: ImageRef::Avatar,
        photos: vec![
            ImageRef::Cartagena,
            ImageRef::ValleDelCocora,
            ImageRef::Medellin,
            ImageRef::SantaMarta,
            ImageRef::Catedral,
            ImageRef::Atardecer,
        ],
    }
}

/// Recent activity for the notifications screen
pub fn notifications() -> Vec<Notification> {
    [
        ("Maria Valen", "Ahora te sigue", "hace 2 días."),
        ("Juan Perez", "Le gustó tu foto", "hace 3 días."),
        ("Sofia Castro", "Comentó tu post", "hace 4 días."),
        ("Mateo Ruiz", "Ahora te sigue", "hace 5 días."),
    ]
    .into_iter()
    .zip(1..)
    .map(|((user_name, action, time), id)| Notification {
        id: NotificationId(id),
        user_name: user_name.to_string(),
        action: action.to_string(),
        time: time.to_string(),
        avatar: ImageRef::Avatar,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_providers_return_same_values_every_call() {
        assert_eq!(posts(), posts());
        assert_eq!(places(), places());
        assert_eq!(reviews(), reviews());
        assert_eq!(profile(), profile());
        assert_eq!(notifications(), notifications());
    }

    #[test]
    fn test_ids_are_unique_within_each_list() {
        let post_ids: HashSet<_> = posts().iter().map(|p| p.id).collect();
        assert_eq!(post_ids.len(), posts().len());
        let review_ids: HashSet<_> = reviews().iter().map(|r| r.id).collect();
        assert_eq!(review_ids.len(), reviews().len());
        let place_ids: HashSet<_> = places().iter().map(|p| p.id).collect();
        assert_eq!(place_ids.len(), 6);
    }

    #[test]
    fn test_sample_literals() {
        let posts = posts();
        assert_eq!(posts[0].author, "Alejandra Gomez");
        assert_eq!(posts[0].location, "Valle del Cocora");
        assert_eq!(posts[3].likes, "1.5k");
        assert_eq!(places()[1].location, "Valle del Cocora");
        assert_eq!(profile().handle, "@Camilo_co");
        assert_eq!(profile().photos.len(), 6);
        assert_eq!(notifications()[2].user_name, "Sofia Castro");
    }
}
