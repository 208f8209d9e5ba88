use mc_core::errors::FormErrors;
use mc_core::records::{rows_or_template, set_primary, FormRow, PrimaryFlag, StepRecord};

/// Local form state of one wizard step.
///
/// Always holds at least one row.
#[derive(Debug, Clone, PartialEq)]
pub struct StepForm<T> {
    rows: Vec<FormRow<T>>,
    errors: FormErrors,
}

impl<T: StepRecord> StepForm<T> {
    /// One blank template row.
    pub fn new() -> Self {
        Self::with_rows(Vec::new())
    }

    /// The given rows, or one template row if there are none.
    pub fn with_rows(rows: Vec<FormRow<T>>) -> Self {
        Self {
            rows: rows_or_template(rows),
            errors: FormErrors::default(),
        }
    }

    pub fn rows(&self) -> &[FormRow<T>] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [FormRow<T>] {
        &mut self.rows
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn add_row(&mut self) -> usize {
        self.rows.push(FormRow::blank());
        self.rows.len() - 1
    }

    pub fn reset(&mut self) {
        self.rows = vec![FormRow::blank()];
        self.errors.clear();
    }

    pub(crate) fn set_errors(&mut self, errors: FormErrors) {
        self.errors = errors;
    }

    pub(crate) fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Drop a row locally; an emptied form gets a fresh template row.
    pub(crate) fn remove_local(&mut self, index: usize) -> Option<FormRow<T>> {
        if index >= self.rows.len() {
            return None;
        }
        let removed = self.rows.remove(index);
        if self.rows.is_empty() {
            self.rows.push(FormRow::blank());
        }
        Some(removed)
    }
}

impl<T: StepRecord + PrimaryFlag> StepForm<T> {
    /// Set one row's primary flag; turning it on clears every sibling.
    pub fn set_primary(&mut self, index: usize, value: bool) -> bool {
        set_primary(&mut self.rows, index, value)
    }
}

impl<T: StepRecord> Default for StepForm<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mc_core::records::{Email, Job, PrimaryFlag};

    fn email(address: &str, is_primary: bool) -> FormRow<Email> {
        FormRow::new(Email {
            email_type: "personal".to_string(),
            email: address.to_string(),
            is_primary,
        })
    }

    #[test]
    fn test_new_form_has_one_template_row() {
        let form = StepForm::<Job>::new();
        assert_eq!(form.rows().len(), 1);
        assert_eq!(form.rows()[0].record, Job::default());
    }

    #[test]
    fn test_set_primary_exclusive_across_three_rows() {
        let mut form = StepForm::with_rows(vec![
            email("one@club.org", true),
            email("two@club.org", false),
            email("three@club.org", false),
        ]);

        assert!(form.set_primary(1, true));

        let flags: Vec<bool> = form.rows().iter().map(|r| r.is_primary()).collect();
        assert_eq!(flags, vec![false, true, false]);
    }

    #[test]
    fn test_remove_last_row_reseeds_template() {
        let mut form = StepForm::with_rows(vec![email("one@club.org", true)]);
        let removed = form.remove_local(0).unwrap();
        assert_eq!(removed.record.email, "one@club.org");
        assert_eq!(form.rows().len(), 1);
        assert_eq!(form.rows()[0].record, Email::default());
        assert!(form.remove_local(5).is_none());
    }

    #[test]
    fn test_add_row_and_reset() {
        let mut form = StepForm::<Job>::new();
        assert_eq!(form.add_row(), 1);
        form.set_errors({
            let mut e = FormErrors::default();
            e.set("data.0.title", "required");
            e
        });
        form.reset();
        assert_eq!(form.rows().len(), 1);
        assert!(form.errors().is_empty());
    }
}
