//! Fluent construction of an immutable record: the Builder pattern.
//!
//! The builder stores every field as `Option` so "never set" stays
//! distinguishable from "set to an empty value". `build` borrows the
//! builder, so one builder can keep accumulating fields and produce
//! several snapshots; nothing un-sets a field short of a fresh builder.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum UserError {
    /// Rejected before storage; the builder is left unchanged.
    #[error("age cannot be negative, got {0}")]
    NegativeAge(i64),
    /// Also rejected before storage: values too large to be a real age.
    #[error("age {0} is out of range")]
    AgeOutOfRange(i64),
    /// Named for the first required field found missing or blank.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// An immutable account record. `username` and `email` are always present
/// and non-blank; the rest is optional and omitted from the JSON form when
/// absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    username: String,
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
}

impl User {
    pub fn builder() -> UserBuilder {
        UserBuilder::default()
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn age(&self) -> Option<u32> {
        self.age
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.username, self.email)?;
        if let Some(first) = &self.first_name {
            write!(f, ", first name: {first}")?;
        }
        if let Some(last) = &self.last_name {
            write!(f, ", last name: {last}")?;
        }
        if let Some(age) = self.age {
            write!(f, ", age: {age}")?;
        }
        if let Some(phone) = &self.phone {
            write!(f, ", phone: {phone}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct UserBuilder {
    username: Option<String>,
    email: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    age: Option<u32>,
    phone: Option<String>,
}

impl UserBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Validates before storing: a negative or absurdly large age leaves
    /// the builder as it was and fails the chain.
    pub fn age(mut self, age: i64) -> Result<Self, UserError> {
        if age < 0 {
            return Err(UserError::NegativeAge(age));
        }
        let age = u32::try_from(age).map_err(|_| UserError::AgeOutOfRange(age))?;
        self.age = Some(age);
        Ok(self)
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Produces an immutable snapshot of the fields set so far. Required
    /// fields must be present and not all-whitespace; the error names the
    /// first one that is not. The builder stays usable afterwards.
    pub fn build(&self) -> Result<User, UserError> {
        let username = required("username", &self.username)?.to_string();
        let email = required("email", &self.email)?.to_string();

        Ok(User {
            username,
            email,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            age: self.age,
            phone: self.phone.clone(),
        })
    }
}

fn required<'a>(name: &'static str, field: &'a Option<String>) -> Result<&'a str, UserError> {
    match field {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(UserError::MissingField(name)),
    }
}
