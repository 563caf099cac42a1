//! Receipt templates for common payment scenarios
//!
//! Each template turns a handful of scenario fields into
//! [`CreateReceiptOptions`] with a descriptive reference, then records it.
//! Wallet addresses are optional; the party's name is used when one is
//! missing.

use super::{Receipts, Resource};
use crate::{
    error::Result,
    types::{CreateReceiptOptions, Network, Receipt},
};
use proofrails_transport::HttpTransport;

/// Currency used by the payment template when none is given.
pub const DEFAULT_PAYMENT_CURRENCY: &str = "C2FLR";
/// Currency used by the other templates.
pub const DEFAULT_TEMPLATE_CURRENCY: &str = "FLR";

/// A scenario that can be recorded as a receipt.
pub trait ReceiptTemplate {
    /// Receipt options for this scenario.
    fn to_options(&self) -> CreateReceiptOptions;
}

fn wallet_or(wallet: &Option<String>, fallback: &str) -> String {
    wallet
        .as_deref()
        .filter(|w| !w.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

/// A simple payment between two parties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentTemplate {
    /// Payment amount
    pub amount: f64,
    /// Who sent the payment
    pub from: String,
    /// Who received the payment
    pub to: String,
    /// What the payment is for
    pub purpose: String,
    /// Payment transaction hash
    pub transaction_hash: String,
    /// Sender wallet address
    pub sender_wallet: Option<String>,
    /// Receiver wallet address
    pub receiver_wallet: Option<String>,
    /// Network, Coston2 when unset
    pub chain: Option<Network>,
    /// Currency, `C2FLR` when unset
    pub currency: Option<String>,
}

impl ReceiptTemplate for PaymentTemplate {
    fn to_options(&self) -> CreateReceiptOptions {
        CreateReceiptOptions {
            transaction_hash: self.transaction_hash.clone(),
            chain: self.chain.unwrap_or_default(),
            amount: self.amount.to_string(),
            currency: self
                .currency
                .clone()
                .unwrap_or_else(|| DEFAULT_PAYMENT_CURRENCY.to_string()),
            sender: wallet_or(&self.sender_wallet, &self.from),
            receiver: wallet_or(&self.receiver_wallet, &self.to),
            reference: format!("Payment: {} (Tx: {})", self.purpose, self.transaction_hash),
            callback_url: None,
        }
    }
}

/// A charitable donation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DonationTemplate {
    /// Donation amount
    pub amount: f64,
    /// Donor name
    pub donor: String,
    /// Receiving organization
    pub organization: String,
    /// Campaign or cause
    pub campaign: String,
    /// Payment transaction hash
    pub transaction_hash: String,
    /// Donor wallet address
    pub donor_wallet: Option<String>,
    /// Organization wallet address
    pub organization_wallet: Option<String>,
}

impl ReceiptTemplate for DonationTemplate {
    fn to_options(&self) -> CreateReceiptOptions {
        CreateReceiptOptions {
            transaction_hash: self.transaction_hash.clone(),
            chain: Network::Coston2,
            amount: self.amount.to_string(),
            currency: DEFAULT_TEMPLATE_CURRENCY.to_string(),
            sender: wallet_or(&self.donor_wallet, &self.donor),
            receiver: wallet_or(&self.organization_wallet, &self.organization),
            reference: format!(
                "Donation: {} (Donor: {}, Organization: {})",
                self.campaign, self.donor, self.organization
            ),
            callback_url: None,
        }
    }
}

/// Release of funds held in escrow.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EscrowTemplate {
    /// Amount released
    pub amount: f64,
    /// Buyer name
    pub buyer: String,
    /// Seller name
    pub seller: String,
    /// Escrow identifier
    pub escrow_id: String,
    /// Why the funds were released
    pub release_reason: String,
    /// Payment transaction hash
    pub transaction_hash: String,
    /// Buyer wallet address
    pub buyer_wallet: Option<String>,
    /// Seller wallet address
    pub seller_wallet: Option<String>,
}

impl ReceiptTemplate for EscrowTemplate {
    fn to_options(&self) -> CreateReceiptOptions {
        CreateReceiptOptions {
            transaction_hash: self.transaction_hash.clone(),
            chain: Network::Coston2,
            amount: self.amount.to_string(),
            currency: DEFAULT_TEMPLATE_CURRENCY.to_string(),
            sender: wallet_or(&self.buyer_wallet, &self.buyer),
            receiver: wallet_or(&self.seller_wallet, &self.seller),
            reference: format!(
                "Escrow Release: {} - {} (Buyer: {}, Seller: {})",
                self.escrow_id, self.release_reason, self.buyer, self.seller
            ),
            callback_url: None,
        }
    }
}

/// A grant disbursement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GrantTemplate {
    /// Grant amount
    pub amount: f64,
    /// Recipient name
    pub grantee: String,
    /// Funder name
    pub grantor: String,
    /// Grant identifier
    pub grant_id: String,
    /// What the grant funds
    pub purpose: String,
    /// Payment transaction hash
    pub transaction_hash: String,
    /// Funder wallet address
    pub grantor_wallet: Option<String>,
    /// Recipient wallet address
    pub grantee_wallet: Option<String>,
}

impl ReceiptTemplate for GrantTemplate {
    fn to_options(&self) -> CreateReceiptOptions {
        CreateReceiptOptions {
            transaction_hash: self.transaction_hash.clone(),
            chain: Network::Coston2,
            amount: self.amount.to_string(),
            currency: DEFAULT_TEMPLATE_CURRENCY.to_string(),
            sender: wallet_or(&self.grantor_wallet, &self.grantor),
            receiver: wallet_or(&self.grantee_wallet, &self.grantee),
            reference: format!(
                "Grant: {} - {} (Grantor: {}, Grantee: {})",
                self.grant_id, self.purpose, self.grantor, self.grantee
            ),
            callback_url: None,
        }
    }
}

/// A refund to a customer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RefundTemplate {
    /// Refund amount
    pub amount: f64,
    /// Receipt id of the payment being refunded
    pub original_payment: String,
    /// Why the payment was refunded
    pub reason: String,
    /// Customer name
    pub customer: String,
    /// Payment transaction hash
    pub transaction_hash: String,
    /// Business wallet address; `"Business"` when unset
    pub business_wallet: Option<String>,
    /// Customer wallet address
    pub customer_wallet: Option<String>,
}

impl ReceiptTemplate for RefundTemplate {
    fn to_options(&self) -> CreateReceiptOptions {
        CreateReceiptOptions {
            transaction_hash: self.transaction_hash.clone(),
            chain: Network::Coston2,
            amount: self.amount.to_string(),
            currency: DEFAULT_TEMPLATE_CURRENCY.to_string(),
            sender: wallet_or(&self.business_wallet, "Business"),
            receiver: wallet_or(&self.customer_wallet, &self.customer),
            reference: format!(
                "Refund: {} - {} (Customer: {})",
                self.original_payment, self.reason, self.customer
            ),
            callback_url: None,
        }
    }
}

/// Templates resource.
#[derive(Clone)]
pub struct Templates {
    receipts: Receipts,
}

impl Templates {
    pub(crate) fn new(transport: HttpTransport) -> Self {
        Self {
            receipts: Receipts::new(transport),
        }
    }

    /// Record any template.
    pub async fn create(&self, template: &impl ReceiptTemplate) -> Result<Receipt> {
        self.receipts.create(&template.to_options()).await
    }

    /// Record a payment.
    pub async fn payment(&self, template: &PaymentTemplate) -> Result<Receipt> {
        self.create(template).await
    }

    /// Record a donation.
    pub async fn donation(&self, template: &DonationTemplate) -> Result<Receipt> {
        self.create(template).await
    }

    /// Record an escrow release.
    pub async fn escrow(&self, template: &EscrowTemplate) -> Result<Receipt> {
        self.create(template).await
    }

    /// Record a grant disbursement.
    pub async fn grant(&self, template: &GrantTemplate) -> Result<Receipt> {
        self.create(template).await
    }

    /// Record a refund.
    pub async fn refund(&self, template: &RefundTemplate) -> Result<Receipt> {
        self.create(template).await
    }
}

impl Resource for Templates {
    fn transport(&self) -> &HttpTransport {
        self.receipts.transport()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_payment_defaults_and_wallet_fallback() {
        let options = PaymentTemplate {
            amount: 10.0,
            from: "Alice".to_string(),
            to: "Bob".to_string(),
            purpose: "Coffee".to_string(),
            transaction_hash: "0xabc".to_string(),
            receiver_wallet: Some("0x02".to_string()),
            ..Default::default()
        }
        .to_options();

        assert_eq!(options.chain, Network::Coston2);
        assert_eq!(options.currency, "C2FLR");
        assert_eq!(options.amount, "10");
        assert_eq!(options.sender, "Alice");
        assert_eq!(options.receiver, "0x02");
        assert_eq!(options.reference, "Payment: Coffee (Tx: 0xabc)");
    }

    #[test]
    fn test_donation_reference() {
        let options = DonationTemplate {
            amount: 2.5,
            donor: "Dana".to_string(),
            organization: "Trees".to_string(),
            campaign: "Reforest".to_string(),
            transaction_hash: "0x1".to_string(),
            ..Default::default()
        }
        .to_options();

        assert_eq!(options.currency, "FLR");
        assert_eq!(options.amount, "2.5");
        assert_eq!(options.reference, "Donation: Reforest (Donor: Dana, Organization: Trees)");
    }

    #[test]
    fn test_escrow_and_grant_references() {
        let escrow = EscrowTemplate {
            buyer: "B".to_string(),
            seller: "S".to_string(),
            escrow_id: "E-1".to_string(),
            release_reason: "Delivered".to_string(),
            ..Default::default()
        }
        .to_options();
        assert_eq!(escrow.reference, "Escrow Release: E-1 - Delivered (Buyer: B, Seller: S)");

        let grant = GrantTemplate {
            grantee: "Lab".to_string(),
            grantor: "Fund".to_string(),
            grant_id: "G-7".to_string(),
            purpose: "Research".to_string(),
            ..Default::default()
        }
        .to_options();
        assert_eq!(grant.reference, "Grant: G-7 - Research (Grantor: Fund, Grantee: Lab)");
        assert_eq!(grant.sender, "Fund");
    }

    #[test]
    fn test_refund_sender_falls_back_to_business() {
        let options = RefundTemplate {
            amount: 5.0,
            original_payment: "r-9".to_string(),
            reason: "Damaged".to_string(),
            customer: "Carol".to_string(),
            transaction_hash: "0x2".to_string(),
            ..Default::default()
        }
        .to_options();

        assert_eq!(options.sender, "Business");
        assert_eq!(options.receiver, "Carol");
        assert_eq!(options.reference, "Refund: r-9 - Damaged (Customer: Carol)");
    }
}
