//! Contract conditions, offers and page counts.

use nsi_core::{ContractCondition, Offer, Segmentation};

use crate::error::ScraperError;
use crate::normalize::normalize_offers;
use crate::types::{ContractConditionsResponse, OffersResponse, PageCountResponse};

use super::NsiClient;

impl NsiClient {
    /// Lists the contract-condition codes available to `segmentation`.
    ///
    /// Each code is the first token of the portlet's raw value plus `V` for
    /// mixed segments or `A` otherwise.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Http`], [`ScraperError::NotFound`],
    ///   [`ScraperError::UnexpectedStatus`] on transport failure.
    /// - [`ScraperError::Deserialize`] if the body lacks
    ///   `pageInfo.availableContractConditions`.
    /// - [`ScraperError::MissingField`] if a raw value is blank.
    pub async fn available_contract_conditions(
        &self,
        url: &str,
        segmentation: &Segmentation,
    ) -> Result<Vec<ContractCondition>, ScraperError> {
        let context = format!("contract conditions for {segmentation}");
        let response: ContractConditionsResponse = self
            .post_form(
                url,
                &[("processSegmentationCode", segmentation.as_str())],
                &context,
            )
            .await?;

        let conditions = response
            .page_info
            .available_contract_conditions
            .iter()
            .map(|raw| {
                ContractCondition::from_raw(&raw.value, segmentation).ok_or_else(|| {
                    ScraperError::MissingField {
                        context: context.clone(),
                        field: "pageInfo.availableContractConditions[].value".to_owned(),
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(
            segmentation = %segmentation,
            count = conditions.len(),
            "resolved contract conditions"
        );
        Ok(conditions)
    }

    /// Lists every offer for `segmentation` across `contract_conditions`.
    ///
    /// One request per contract condition, in order. Offers are concatenated
    /// as encountered and not deduplicated. Regular segments answer in the
    /// `rotator` list; when it is empty the `sliderPositions["0"]` list is
    /// used instead and remapped to the canonical shape.
    ///
    /// # Errors
    ///
    /// - Transport errors as for [`Self::available_contract_conditions`].
    /// - [`ScraperError::Deserialize`] if a rotator entry, or a slider entry
    ///   that is actually used, lacks a required key.
    /// - [`ScraperError::MissingField`] if the rotator is empty and slider
    ///   position `"0"` is absent.
    pub async fn offer_list(
        &self,
        url: &str,
        segmentation: &Segmentation,
        contract_conditions: &[ContractCondition],
    ) -> Result<Vec<Offer>, ScraperError> {
        let mut offers = Vec::new();

        for contract_condition in contract_conditions {
            let context = format!("offers for {segmentation} / {contract_condition}");
            let response: OffersResponse = self
                .post_form(
                    url,
                    &[
                        ("processSegmentationCode", segmentation.as_str()),
                        ("contractConditionCode", contract_condition.as_str()),
                    ],
                    &context,
                )
                .await?;

            let payload = response
                .into_payload()
                .map_err(|source| ScraperError::Deserialize {
                    context: context.clone(),
                    source,
                })?
                .ok_or_else(|| ScraperError::MissingField {
                    context,
                    field: format!(
                        "sliderPositions[\"{}\"]",
                        OffersResponse::SLIDER_FALLBACK_POSITION
                    ),
                })?;

            let batch = normalize_offers(payload, contract_condition);
            tracing::debug!(
                segmentation = %segmentation,
                contract_condition = %contract_condition,
                count = batch.len(),
                "listed offers"
            );
            offers.extend(batch);
        }

        tracing::info!(
            segmentation = %segmentation,
            count = offers.len(),
            "listed offers across contract conditions"
        );
        Ok(offers)
    }

    /// Returns how many device listing pages `offer` has, verbatim.
    ///
    /// # Errors
    ///
    /// Transport errors, or [`ScraperError::Deserialize`] if the body lacks
    /// `pageInfo.pages`.
    pub async fn pages(
        &self,
        url: &str,
        segmentation: &Segmentation,
        offer: &Offer,
    ) -> Result<i64, ScraperError> {
        let response: PageCountResponse = self
            .post_form(
                url,
                &offer_form(segmentation, offer),
                &format!("page count for offer {}", offer.offer_nsi_code),
            )
            .await?;
        Ok(response.page_info.pages)
    }
}

/// Form fields identifying an offer within a segment.
pub(super) fn offer_form<'a>(
    segmentation: &'a Segmentation,
    offer: &'a Offer,
) -> [(&'static str, &'a str); 4] {
    [
        ("processSegmentationCode", segmentation.as_str()),
        ("offerNSICode", offer.offer_nsi_code.as_str()),
        ("tariffPlanCode", offer.tariff_plan_code.as_str()),
        ("contractConditionCode", offer.contract_condition_code.as_str()),
    ]
}
