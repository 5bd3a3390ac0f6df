//! Publish form state.
//!
//! All transitions of the upload form live here so the view only binds
//! signals to them. Generic over [`FileHandle`] so it runs without a browser.

use crate::types::{
    strip_extension, DatasetDraft, DraftField, FileHandle, License, PublishResult, UploadStatus,
    Visibility,
};

/// Selected file, draft metadata and upload status of the publish form.
#[derive(Clone, Debug)]
pub struct PublishForm<F> {
    file: Option<F>,
    draft: DatasetDraft,
    status: UploadStatus,
}

impl<F> Default for PublishForm<F> {
    fn default() -> Self {
        Self {
            file: None,
            draft: DatasetDraft::default(),
            status: UploadStatus::Idle,
        }
    }
}

impl<F: FileHandle> PublishForm<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    pub fn draft(&self) -> &DatasetDraft {
        &self.draft
    }

    pub fn status(&self) -> UploadStatus {
        self.status
    }

    /// Store the file and overwrite the draft name with its stem.
    pub fn select_file(&mut self, file: F) {
        self.draft.name = strip_extension(&file.file_name()).to_string();
        self.file = Some(file);
        if !self.status.is_uploading() {
            self.status = UploadStatus::Idle;
        }
    }

    /// Replace a text field of the draft.
    pub fn set_text(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Name => self.draft.name = value,
            DraftField::Description => self.draft.description = value,
            DraftField::License | DraftField::Visibility => {
                log::warn!("{:?} is not a text field, ignoring edit", field);
            }
        }
    }

    pub fn set_license(&mut self, license: License) {
        self.draft.license = license;
    }

    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.draft.visibility = visibility;
    }

    /// Apply a raw value coming from an input or select element.
    ///
    /// Unknown select values leave the draft untouched.
    pub fn edit(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Name | DraftField::Description => self.set_text(field, value),
            DraftField::License => match value.parse() {
                Ok(license) => self.set_license(license),
                Err(e) => log::warn!("{}", e),
            },
            DraftField::Visibility => match value.parse() {
                Ok(visibility) => self.set_visibility(visibility),
                Err(e) => log::warn!("{}", e),
            },
        }
    }

    /// Whether the publish button is enabled.
    pub fn can_submit(&self) -> bool {
        self.file.is_some() && !self.status.is_uploading()
    }

    /// Enter the uploading state and hand out what the request needs.
    ///
    /// Returns `None` when submission is not allowed.
    pub fn begin_upload(&mut self) -> Option<(F, DatasetDraft)> {
        if !self.can_submit() {
            return None;
        }
        let file = self.file.clone()?;
        self.status = UploadStatus::Uploading;
        Some((file, self.draft.clone()))
    }

    /// Settle the in-flight upload.
    pub fn finish_upload(&mut self, result: &PublishResult<()>) {
        match result {
            Ok(()) => {
                self.status = UploadStatus::Succeeded;
                self.file = None;
                self.draft = DatasetDraft::default();
            }
            Err(_) => self.status = UploadStatus::Failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PublishError;

    #[derive(Clone, Debug, PartialEq)]
    struct FakeFile(&'static str);

    impl FileHandle for FakeFile {
        fn file_name(&self) -> String {
            self.0.to_string()
        }

        fn size(&self) -> f64 {
            1024.0
        }
    }

    fn form_with(name: &'static str) -> PublishForm<FakeFile> {
        let mut form = PublishForm::new();
        form.select_file(FakeFile(name));
        form
    }

    #[test]
    fn test_select_file_sets_name() {
        let form = form_with("ocean-temps.v2.csv");
        assert_eq!(form.draft().name, "ocean-temps.v2");
        assert_eq!(form.file(), Some(&FakeFile("ocean-temps.v2.csv")));
    }

    #[test]
    fn test_select_file_overwrites_edited_name() {
        let mut form = form_with("first.csv");
        form.edit(DraftField::Name, "My hand-typed name".to_string());
        form.select_file(FakeFile("second.json"));
        assert_eq!(form.draft().name, "second");
    }

    #[test]
    fn test_can_submit() {
        let mut form: PublishForm<FakeFile> = PublishForm::new();
        assert!(!form.can_submit());

        form.select_file(FakeFile("a.csv"));
        assert!(form.can_submit());

        assert!(form.begin_upload().is_some());
        assert!(!form.can_submit());
        assert!(form.begin_upload().is_none());
    }

    #[test]
    fn test_begin_upload_without_file() {
        let mut form: PublishForm<FakeFile> = PublishForm::new();
        assert!(form.begin_upload().is_none());
        assert_eq!(form.status(), UploadStatus::Idle);
    }

    #[test]
    fn test_success_resets_form() {
        let mut form = form_with("ocean-temps.v2.csv");
        form.edit(DraftField::Description, "Buoy readings".to_string());
        form.edit(DraftField::License, "MIT".to_string());
        form.edit(DraftField::Visibility, "public".to_string());

        let (file, draft) = form.begin_upload().unwrap();
        assert_eq!(file, FakeFile("ocean-temps.v2.csv"));
        assert_eq!(draft.license, License::Mit);

        form.finish_upload(&Ok(()));
        assert_eq!(form.status(), UploadStatus::Succeeded);
        assert!(form.file().is_none());
        assert_eq!(form.draft(), &DatasetDraft::default());
        assert!(!form.can_submit());
    }

    #[test]
    fn test_failure_keeps_form() {
        let mut form = form_with("reads.fastq");
        form.edit(DraftField::Description, "Run 7".to_string());
        let before = form.draft().clone();

        form.begin_upload().unwrap();
        form.finish_upload(&Err(PublishError::Status {
            status: 503,
            body: String::new(),
        }));

        assert_eq!(form.status(), UploadStatus::Failed);
        assert_eq!(form.file(), Some(&FakeFile("reads.fastq")));
        assert_eq!(form.draft(), &before);
        assert!(form.can_submit());
    }

    #[test]
    fn test_network_failure_keeps_form() {
        let mut form = form_with("a.csv");
        form.begin_upload().unwrap();
        form.finish_upload(&Err(PublishError::Network("connection refused".to_string())));
        assert_eq!(form.status(), UploadStatus::Failed);
        assert!(form.file().is_some());
    }

    #[test]
    fn test_select_file_clears_previous_outcome() {
        let mut form = form_with("a.csv");
        form.begin_upload().unwrap();
        form.finish_upload(&Ok(()));
        assert_eq!(form.status(), UploadStatus::Succeeded);

        form.select_file(FakeFile("b.csv"));
        assert_eq!(form.status(), UploadStatus::Idle);
    }

    #[test]
    fn test_select_file_while_uploading_keeps_status() {
        let mut form = form_with("a.csv");
        form.begin_upload().unwrap();
        form.select_file(FakeFile("b.csv"));
        assert_eq!(form.status(), UploadStatus::Uploading);
        assert!(!form.can_submit());
    }

    #[test]
    fn test_unknown_select_value_ignored() {
        let mut form = form_with("a.csv");
        form.edit(DraftField::License, "WTFPL".to_string());
        form.edit(DraftField::Visibility, "secret".to_string());
        assert_eq!(form.draft().license, License::CcBy4);
        assert_eq!(form.draft().visibility, Visibility::Private);
    }
}
