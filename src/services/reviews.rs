//! Review submission and moderation service

use validator::Validate;

use crate::{
    error::AppResult,
    models::{
        review::{ModerateReview, ModerationDecision, Review, ReviewScope, SubmitReview},
        user::Caller,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct ReviewsService {
    repository: Repository,
}

impl ReviewsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List reviews visible to the caller, newest first.
    ///
    /// Staff see everything; authenticated users see approved reviews plus
    /// their own in any state; anonymous callers see approved only.
    pub async fn list(&self, caller: &Caller, attraction_id: Option<i32>) -> AppResult<Vec<Review>> {
        let scope = ReviewScope::for_caller(caller);
        self.repository.reviews.list(scope, attraction_id).await
    }

    /// Submit a review. Requires an authenticated caller; the status is
    /// forced to `pending` and the author to the caller, whatever the
    /// request body claimed.
    pub async fn submit(&self, caller: &Caller, request: &SubmitReview) -> AppResult<Review> {
        let author_id = caller.require_authenticated()?;
        request.validate()?;

        // The attraction must exist and be visible to the caller
        self.repository
            .attractions
            .get_by_id(request.attraction, caller.is_staff())
            .await?;

        let review = self
            .repository
            .reviews
            .create(author_id, request.attraction, request.rating, &request.text)
            .await?;

        tracing::info!(
            "Review {} submitted by user {} on attraction {}",
            review.id,
            author_id,
            request.attraction
        );
        Ok(review)
    }

    /// Moderate a review (staff only). The decision must be exactly
    /// `approved` or `rejected`; anything else fails validation before the
    /// review is touched. The parent attraction's rating changes on the
    /// next read.
    pub async fn moderate(
        &self,
        caller: &Caller,
        review_id: i32,
        request: &ModerateReview,
    ) -> AppResult<Review> {
        let staff_id = caller.require_staff()?;
        let decision = ModerationDecision::parse(&request.status)?;

        let review = self
            .repository
            .reviews
            .moderate(review_id, decision, request.reason.as_deref())
            .await?;

        tracing::info!(
            "Review {} {} by staff user {}",
            review_id,
            decision.as_str(),
            staff_id
        );
        Ok(review)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::AppError;
    use crate::models::review::ModerationDecision;

    #[test]
    fn test_invalid_decision_is_rejected_before_any_write() {
        // The literal error message is part of the external contract
        let err = ModerationDecision::parse("escalated").unwrap_err();
        match err {
            AppError::Validation(msg) => assert_eq!(msg, "Invalid status"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
