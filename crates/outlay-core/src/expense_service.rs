//! Validated mutation operations for expense records.

use tracing::{debug, warn};
use uuid::Uuid;

use outlay_domain::{Expense, ExpenseDraft};

use crate::error::{CoreError, CoreResult, Field, FieldError, ValidationErrors};
use crate::id::IdProvider;
use crate::tracker::Tracker;

/// Number of identifier candidates tried before giving up.
const MAX_ID_ATTEMPTS: usize = 8;

/// Provides validated add/remove operations over a [`Tracker`].
pub struct ExpenseService;

impl ExpenseService {
    /// Validates `draft`, allocates a unique identifier, and inserts the new
    /// record at the head of the collection.
    ///
    /// On any field failure the whole submission is rejected and the tracker
    /// is left untouched.
    pub fn add(
        tracker: &mut Tracker,
        draft: ExpenseDraft,
        ids: &dyn IdProvider,
    ) -> CoreResult<Expense> {
        Self::validate(&draft)?;
        let id = Self::allocate_id(tracker, ids)?;
        // validate() guarantees both fields are present
        let category = draft.category.ok_or_else(Self::missing_category)?;
        let date = draft.date.ok_or_else(Self::missing_date)?;
        let expense = Expense::new(
            id,
            draft.description.trim(),
            draft.amount,
            category,
            date,
            draft.payment_method,
        );
        tracker.insert_expense(expense.clone());
        debug!(%id, amount = expense.amount, category = %expense.category, "expense added");
        Ok(expense)
    }

    /// Removes the record with `id`. Removing an absent id is a no-op.
    pub fn remove(tracker: &mut Tracker, id: Uuid) {
        tracker.remove_expense(id);
    }

    /// Checks every field and collects the failures in form order.
    pub fn validate(draft: &ExpenseDraft) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();
        if draft.description.trim().is_empty() {
            errors.push(FieldError::new(
                Field::Description,
                "Description is required.",
            ));
        }
        if !draft.amount.is_finite() || draft.amount <= 0.0 {
            errors.push(FieldError::new(Field::Amount, "Enter a positive amount."));
        }
        if draft.date.is_none() {
            errors.push(FieldError::new(
                Field::Date,
                "Select the transaction date.",
            ));
        }
        if draft.category.is_none() {
            errors.push(FieldError::new(Field::Category, "Choose a category."));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors::new(errors))
        }
    }

    fn allocate_id(tracker: &Tracker, ids: &dyn IdProvider) -> CoreResult<Uuid> {
        for attempt in 0..MAX_ID_ATTEMPTS {
            let candidate = ids.next_id();
            if !tracker.contains(candidate) {
                return Ok(candidate);
            }
            warn!(%candidate, attempt, "expense id collision, regenerating");
        }
        Err(CoreError::IdentifierExhausted(MAX_ID_ATTEMPTS))
    }

    fn missing_category() -> CoreError {
        ValidationErrors::new(vec![FieldError::new(Field::Category, "Choose a category.")])
            .into()
    }

    fn missing_date() -> CoreError {
        ValidationErrors::new(vec![FieldError::new(
            Field::Date,
            "Select the transaction date.",
        )])
        .into()
    }
}
