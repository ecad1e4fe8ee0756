//! Cards for posts, places, reviews and notifications.

use super::image::{avatar, ImagePlaceholder};
use super::rating::stars;
use crate::data::{Notification, Place, Post, Review};
use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

fn card_block(selected: bool) -> Block<'static> {
    let t = theme();
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if selected {
            t.border_focused_style()
        } else {
            t.border_style()
        })
}

/// Home feed post: author row, photo, like and comment counts
pub struct PostCard<'a> {
    post: &'a Post,
    selected: bool,
}

impl<'a> PostCard<'a> {
    pub fn new(post: &'a Post, selected: bool) -> Self {
        Self { post, selected }
    }
}

impl Widget for PostCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let block = card_block(self.selected);
        let inner = block.inner(area);
        block.render(area, buf);

        let [author, photo, counts] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(vec![
            Line::from(vec![
                avatar(self.post.initial()),
                Span::raw(" "),
                Span::styled(self.post.author.clone(), t.emphasis_style()),
            ]),
            Line::styled(format!("    {}", self.post.location), t.muted_style()),
        ])
        .render(author, buf);

        if photo.height >= 3 {
            ImagePlaceholder::new(self.post.image)
                .highlighted(self.selected)
                .render(photo, buf);
        }

        Paragraph::new(Line::from(vec![
            Span::styled("♥ ", t.error_style()),
            Span::styled(self.post.likes.clone(), t.text_style()),
            Span::raw("   "),
            Span::styled("💬 ", t.muted_style()),
            Span::styled(self.post.comments.clone(), t.text_style()),
        ]))
        .render(counts, buf);
    }
}

/// Explore grid tile
pub struct PlaceCard<'a> {
    place: &'a Place,
    highlighted: bool,
}

impl<'a> PlaceCard<'a> {
    pub fn new(place: &'a Place, highlighted: bool) -> Self {
        Self { place, highlighted }
    }
}

impl Widget for PlaceCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        ImagePlaceholder::new(self.place.image)
            .highlighted(self.highlighted)
            .render(area, buf);
    }
}

/// Community review with stars and like count
pub struct ReviewCard<'a> {
    review: &'a Review,
    selected: bool,
}

impl<'a> ReviewCard<'a> {
    pub fn new(review: &'a Review, selected: bool) -> Self {
        Self { review, selected }
    }

    /// Rows needed to draw this review, borders included
    pub fn height(review: &Review) -> u16 {
        review.comment.lines().count() as u16 + 4
    }
}

impl Widget for ReviewCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let block = card_block(self.selected);
        let inner = block.inner(area);
        block.render(area, buf);

        let initial = self.review.author.chars().next().unwrap_or('?');
        let mut lines = vec![Line::from(vec![
            avatar(initial),
            Span::raw(" "),
            Span::styled(self.review.author.clone(), t.emphasis_style()),
            Span::raw("  "),
        ])];
        lines[0].spans.extend(stars(self.review.rating).spans);
        lines.extend(
            self.review
                .comment
                .lines()
                .map(|l| Line::styled(l.to_string(), t.text_style())),
        );
        lines.push(
            Line::from(vec![
                Span::styled("♥ ", t.error_style()),
                Span::styled(self.review.likes.to_string(), t.text_style()),
            ])
            .right_aligned(),
        );

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

/// Single line in the notifications list
pub fn notification_line(notification: &Notification) -> Line<'static> {
    let t = theme();
    let initial = notification.user_name.chars().next().unwrap_or('?');
    Line::from(vec![
        avatar(initial),
        Span::raw(" "),
        Span::styled(notification.user_name.clone(), t.emphasis_style()),
        Span::raw(" "),
        Span::styled(notification.action.clone(), t.text_style()),
        Span::raw(" "),
        Span::styled(notification.time.clone(), t.muted_style()),
    ])
}
