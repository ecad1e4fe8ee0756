//! Properties of the screen state records.

use condor::data::{Review, ReviewId};
use condor::state::{
    DetailMsg, DetailState, EditProfileMsg, EditProfileState, FeedMsg, FeedState, HomeMsg,
    HomeState, LoginMsg, LoginState, NotificationsMsg, NotificationsState, ReviewMsg,
    ReviewState, SignUpMsg, SignUpState,
};

fn login(email: &str, password: &str) -> LoginState {
    LoginState::default()
        .update(LoginMsg::EmailChanged(email.to_string()))
        .update(LoginMsg::PasswordChanged(password.to_string()))
}

fn sign_up(password: &str, confirm: &str) -> SignUpState {
    SignUpState::default()
        .update(SignUpMsg::NameChanged("Camilo".to_string()))
        .update(SignUpMsg::LastNameChanged("Restrepo".to_string()))
        .update(SignUpMsg::UsernameChanged("Camilo_co".to_string()))
        .update(SignUpMsg::EmailChanged("camilo@condor.co".to_string()))
        .update(SignUpMsg::PasswordChanged(password.to_string()))
        .update(SignUpMsg::ConfirmPasswordChanged(confirm.to_string()))
}

#[test]
fn test_updates_are_pure() {
    let state = login("a@b.com", "x");
    for msg in [LoginMsg::SignIn, LoginMsg::TogglePasswordVisibility, LoginMsg::ForgotPassword] {
        assert_eq!(state.update(msg.clone()), state.update(msg));
    }

    let state = sign_up("x", "x");
    let msg = SignUpMsg::EmailChanged("otro@condor.co".to_string());
    assert_eq!(state.update(msg.clone()), state.update(msg));

    let state = EditProfileState::default().update(EditProfileMsg::UsernameChanged("c".into()));
    assert_eq!(state.update(EditProfileMsg::Save), state.update(EditProfileMsg::Save));

    let state = FeedState::default();
    assert_eq!(state.update(FeedMsg::SelectCategory(2)), state.update(FeedMsg::SelectCategory(2)));

    let state = HomeState::default();
    assert_eq!(state.update(HomeMsg::SelectPost(1)), state.update(HomeMsg::SelectPost(1)));

    let state = ReviewState::default();
    assert_eq!(state.update(ReviewMsg::SetRating(2)), state.update(ReviewMsg::SetRating(2)));

    let state = DetailState::for_place("Santa Marta");
    let id = state.reviews[0].id;
    assert_eq!(state.update(DetailMsg::LikeReview(id)), state.update(DetailMsg::LikeReview(id)));
}

#[test]
fn test_update_leaves_the_old_record_alone() {
    let before = login("a@b.com", "");
    let snapshot = before.clone();
    let _after = before.update(LoginMsg::PasswordChanged("x".to_string()));
    assert_eq!(before, snapshot);
}

#[test]
fn test_sign_in_enabled_iff_both_fields_filled() {
    assert!(!login("a@b.com", "").can_sign_in());
    assert!(!login("", "x").can_sign_in());
    assert!(!login(" ", " ").can_sign_in());
    assert!(login("a@b.com", "x").can_sign_in());
}

#[test]
fn test_sign_up_needs_matching_passwords() {
    assert!(sign_up("x", "x").can_sign_up());
    assert!(!sign_up("x", "y").can_sign_up());
    assert!(!sign_up("", "").can_sign_up());

    let missing_name = sign_up("x", "x").update(SignUpMsg::NameChanged("  ".to_string()));
    assert!(!missing_name.can_sign_up());
}

#[test]
fn test_like_by_id_touches_one_review() {
    let state = DetailState::for_place("Cartagena");
    let target = state.reviews[1].id;
    let next = state.update(DetailMsg::LikeReview(target));

    for (before, after) in state.reviews.iter().zip(&next.reviews) {
        if before.id == target {
            assert_eq!(after.likes, before.likes + 1);
        } else {
            assert_eq!(after, before);
        }
    }
}

#[test]
fn test_like_by_content_hits_every_duplicate() {
    let mut state = DetailState::for_place("Cartagena");
    let original = state.reviews[0].clone();
    state.reviews.push(Review {
        id: ReviewId(500),
        ..original.clone()
    });

    let next = state.like_matching(&original);
    let bumped: Vec<&Review> = next
        .reviews
        .iter()
        .filter(|r| r.author == original.author && r.likes == original.likes + 1)
        .collect();
    assert_eq!(bumped.len(), 2);
    assert_eq!(next.reviews.len(), state.reviews.len());
    for (before, after) in state.reviews.iter().zip(&next.reviews) {
        if !before.same_content(&original) {
            assert_eq!(after, before);
        }
    }

    // Targeting by id keeps the duplicate unchanged
    let by_id = state.update(DetailMsg::LikeReview(ReviewId(500)));
    assert_eq!(by_id.reviews[0], state.reviews[0]);
    assert_eq!(by_id.reviews.last().map(|r| r.likes), Some(original.likes + 1));
}

#[test]
fn test_clear_all_notifications_is_idempotent() {
    let state = NotificationsState::default();
    assert!(!state.notifications.is_empty());

    let cleared = state.update(NotificationsMsg::ClearAll);
    assert!(cleared.notifications.is_empty());
    assert_eq!(cleared.update(NotificationsMsg::ClearAll), cleared);
    assert_eq!(cleared.selected_tab, state.selected_tab);
}
