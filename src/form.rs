use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::booking::{Booking, BookingId, RoomType, SelectedRange};
use crate::store::EventStore;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("No booking form is open")]
    NoOpenDraft,
    #[error("Unknown form field: {0}")]
    UnknownField(String),
    #[error("Unknown room type: {0}")]
    InvalidRoom(String),
    #[error("A name is required")]
    MissingUserName,
    #[error("End date {end} is before start date {start}")]
    InvertedRange { start: NaiveDate, end: NaiveDate },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    UserName,
    Room,
    Color,
    Participants,
    Comment,
}

impl FormField {
    pub const ORDER: [FormField; 5] = [
        FormField::UserName,
        FormField::Room,
        FormField::Color,
        FormField::Participants,
        FormField::Comment,
    ];

    pub fn next(self) -> Self {
        match self {
            FormField::UserName => FormField::Room,
            FormField::Room => FormField::Color,
            FormField::Color => FormField::Participants,
            FormField::Participants => FormField::Comment,
            FormField::Comment => FormField::UserName,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::UserName => FormField::Comment,
            FormField::Room => FormField::UserName,
            FormField::Color => FormField::Room,
            FormField::Participants => FormField::Color,
            FormField::Comment => FormField::Participants,
        }
    }
}

impl FromStr for FormField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" | "userName" | "user_name" | "title" => Ok(FormField::UserName),
            "room" | "roomType" | "room_type" => Ok(FormField::Room),
            "color" => Ok(FormField::Color),
            "participants" | "otherUsers" | "other_users" => Ok(FormField::Participants),
            "comment" => Ok(FormField::Comment),
            _ => Err(FormError::UnknownField(s.to_string())),
        }
    }
}

/// Uncommitted booking input. Has no id until committed.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub range: SelectedRange,
    pub user_name: String,
    pub room: RoomType,
    pub color: String,
    pub participants: String,
    pub comment: String,
}

impl Draft {
    pub fn new(range: SelectedRange) -> Self {
        Self {
            range,
            user_name: String::new(),
            room: RoomType::Unassigned,
            color: String::new(),
            participants: String::new(),
            comment: String::new(),
        }
    }

    pub fn value(&self, field: FormField) -> String {
        match field {
            FormField::UserName => self.user_name.clone(),
            FormField::Room => self.room.as_str().to_string(),
            FormField::Color => self.color.clone(),
            FormField::Participants => self.participants.clone(),
            FormField::Comment => self.comment.clone(),
        }
    }

    fn into_booking(self, id: BookingId) -> Booking {
        Booking {
            id,
            user_name: self.user_name,
            start: self.range.start,
            end: self.range.end,
            all_day: self.range.all_day,
            room: self.room,
            comment: (!self.comment.is_empty()).then_some(self.comment),
            participants: (!self.participants.is_empty()).then_some(self.participants),
            color: (!self.color.is_empty()).then_some(self.color),
        }
    }
}

/// Checks applied on commit. Both are off by default, so any draft commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationPolicy {
    pub require_user_name: bool,
    pub reject_inverted_ranges: bool,
}

impl ValidationPolicy {
    pub fn check(&self, draft: &Draft) -> Result<(), FormError> {
        if self.require_user_name && draft.user_name.trim().is_empty() {
            return Err(FormError::MissingUserName);
        }
        if self.reject_inverted_ranges && draft.range.end < draft.range.start {
            return Err(FormError::InvertedRange {
                start: draft.range.start,
                end: draft.range.end,
            });
        }
        Ok(())
    }
}

/// Holds at most one open draft, from the selection gesture to commit or cancel.
#[derive(Debug, Clone, Default)]
pub struct BookingForm {
    draft: Option<Draft>,
    active_field: FormField,
    policy: ValidationPolicy,
}

impl BookingForm {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self {
            draft: None,
            active_field: FormField::UserName,
            policy,
        }
    }

    pub fn begin(&mut self, range: SelectedRange) {
        if self.draft.is_some() {
            tracing::debug!("Discarding open draft for new selection");
        }
        tracing::debug!("Opening draft for {} to {}", range.start, range.end);
        self.draft = Some(Draft::new(range));
        self.active_field = FormField::UserName;
    }

    pub fn set_field(&mut self, field: FormField, value: &str) -> Result<(), FormError> {
        let draft = self.draft.as_mut().ok_or(FormError::NoOpenDraft)?;

        match field {
            FormField::UserName => draft.user_name = value.to_string(),
            FormField::Room => {
                draft.room = value
                    .parse()
                    .map_err(|_| FormError::InvalidRoom(value.to_string()))?;
            }
            FormField::Color => draft.color = value.to_string(),
            FormField::Participants => draft.participants = value.to_string(),
            FormField::Comment => draft.comment = value.to_string(),
        }
        Ok(())
    }

    /// Validates the open draft, appends it to `store` under `id` and closes it.
    /// A draft that fails validation stays open.
    pub fn commit(&mut self, store: &mut EventStore, id: BookingId) -> Result<BookingId, FormError> {
        let draft = self.draft.as_ref().ok_or(FormError::NoOpenDraft)?;
        self.policy.check(draft)?;

        let draft = self.draft.take().ok_or(FormError::NoOpenDraft)?;
        store.append(draft.into_booking(id.clone()));
        self.active_field = FormField::UserName;
        tracing::info!("Committed booking {}", id);
        Ok(id)
    }

    pub fn cancel(&mut self) -> Result<(), FormError> {
        self.draft.take().ok_or(FormError::NoOpenDraft)?;
        self.active_field = FormField::UserName;
        tracing::debug!("Draft cancelled");
        Ok(())
    }

    pub fn draft(&self) -> Option<&Draft> {
        self.draft.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    pub fn field_value(&self, field: FormField) -> Option<String> {
        self.draft.as_ref().map(|d| d.value(field))
    }

    pub fn active_field(&self) -> FormField {
        self.active_field
    }

    pub fn next_field(&mut self) {
        self.active_field = self.active_field.next();
    }

    pub fn prev_field(&mut self) {
        self.active_field = self.active_field.prev();
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: ValidationPolicy) {
        self.policy = policy;
    }
}
