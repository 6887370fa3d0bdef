//! Sample project: one Django model with a valid and an invalid set of
//! interfaces.

#![allow(dead_code)]

pub const MODELS_PY: &str = r#""""
Backend model checked against both the valid and the invalid interfaces.
"""

from django.db import models


class EventModel(models.Model):
    """
    Events with organizers and participants.
    """

    title = models.CharField(max_length=200)
    description = models.TextField()
    organizer = models.ForeignKey("User", on_delete=models.CASCADE)
    participants = models.ManyToManyField("User", related_name="events", blank=True)
    is_private = models.BooleanField(default=True)
    date = models.DateTimeField()
    _private_field = models.CharField(max_length=100)  # should be ignored
"#;

pub const INVALID_MODELS_PY: &str = MODELS_PY;

/// Same model, but `participants` is required
pub const VALID_MODEL_PY: &str = r#"from django.db import models


class EventModel(models.Model):
    title = models.CharField(max_length=200)
    description = models.TextField()
    organizer = models.ForeignKey("User", on_delete=models.CASCADE)
    participants = models.ManyToManyField("User", related_name="events")
    is_private = models.BooleanField(default=True)
    date = models.DateTimeField()
    _private_field = models.CharField(max_length=100)  # should be ignored
"#;

pub const VALID_INTERFACES_TS: &str = r#"export interface Event {
  // EventModel is checked through EventExtended.
  title: string;
  description: string;
  organizer: User;
  participants?: User[];
}

export interface EventExtended extends Event {
  isPrivate: boolean;
  // ts-backend-check: ignore field date
}

export interface User {
  id: string;
  name: string;
}
"#;

/// `description` and `date` are missing; the date directive is malformed
pub const INVALID_INTERFACES_TS: &str = r#"export interface Event {
  title: string;
  organizer: User;
  participants: User[];
}

export interface EventExtended extends Event {
  // ts-backend-check: ignore date
  isPrivate: boolean;
}

export interface User {
  id: string;
  name: string;
}
"#;

/// Flat interface checked against `valid_model/models.py`
pub const NESTED_VALID_INTERFACES_TS: &str = r#"export interface Event {
  title: string;
  description: string;
  organizer: User;
  // ts-backend-check: ignore field participants
  isPrivate: boolean;
  // ts-backend-check: ignore field date
}

export interface User {
  id: string;
  name: string;
}
"#;

/// Maps `EventExtended` onto `EventModel` and skips the helper types
pub const EXTENDED_CONFIG: &str = r#"[[pairs]]
name = "events"
backend = "backend/models.py"
frontend = "frontend/valid_interfaces.ts"

[names]
exclude = ["Event", "User"]

[names.map]
EventExtended = ["EventModel"]
"#;

/// Two pairs, one drifted
pub const TWO_PAIR_CONFIG: &str = r#"[[pairs]]
name = "valid"
backend = "backend/models.py"
frontend = "frontend/valid_interfaces.ts"

[[pairs]]
name = "invalid"
backend = "backend/invalid_models.py"
frontend = "frontend/invalid_interfaces.ts"

[names]
exclude = ["Event", "User"]

[names.map]
EventExtended = ["EventModel"]
"#;

pub const CYCLIC_INTERFACES_TS: &str = r#"export interface A extends B {
  a: string;
}

export interface B extends A {
  b: string;
}
"#;
