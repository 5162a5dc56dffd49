//! Remediation guidance for checklist questions.
//!
//! `GuidanceTable::lookup` is total: a question with no entry resolves to
//! the fallback record instead of failing, so catalog edits never break
//! result rendering.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Remediation/context text block for a single question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidanceRecord {
    /// Why the practice matters.
    pub rationale: String,
    /// How an attacker takes advantage of the gap.
    pub exploitation_scenario: String,
    /// What the gap means for the business's customers.
    pub client_impact: String,
    /// Regulation or framework the practice maps to.
    pub compliance_reference: String,
    /// Consulting follow-up offered for this item.
    pub assistance_offer: String,
}

impl GuidanceRecord {
    /// Placeholder record used when a question has no table entry.
    pub fn fallback() -> Self {
        Self {
            rationale: "No explanation provided.".to_string(),
            exploitation_scenario: "No data.".to_string(),
            client_impact: "No impact info.".to_string(),
            compliance_reference: "Compliance guidance unavailable.".to_string(),
            assistance_offer: "I can assist with strengthening this area.".to_string(),
        }
    }
}

/// Mapping from question text to its guidance record.
#[derive(Debug, Clone)]
pub struct GuidanceTable {
    entries: HashMap<String, GuidanceRecord>,
}

impl GuidanceTable {
    /// Build a table from deployment-supplied entries.
    pub fn new(entries: HashMap<String, GuidanceRecord>) -> Self {
        Self { entries }
    }

    /// Guidance for the standard catalog.
    pub fn standard() -> Self {
        let mut entries = HashMap::new();
        for (question, record) in standard_entries() {
            entries.insert(question.to_string(), record);
        }
        Self { entries }
    }

    /// Look up guidance for a question.
    ///
    /// Total: unknown questions resolve to `GuidanceRecord::fallback()`.
    pub fn lookup(&self, question: &str) -> GuidanceRecord {
        self.entries
            .get(question)
            .cloned()
            .unwrap_or_else(GuidanceRecord::fallback)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn record(
    rationale: &str,
    exploitation_scenario: &str,
    client_impact: &str,
    compliance_reference: &str,
    assistance_offer: &str,
) -> GuidanceRecord {
    GuidanceRecord {
        rationale: rationale.to_string(),
        exploitation_scenario: exploitation_scenario.to_string(),
        client_impact: client_impact.to_string(),
        compliance_reference: compliance_reference.to_string(),
        assistance_offer: assistance_offer.to_string(),
    }
}

/// Guidance entries keyed by the standard catalog question texts.
fn standard_entries() -> Vec<(&'static str, GuidanceRecord)> {
    vec![
        (
            "Do you keep diagnostic tools and shop management software updated with the latest security patches?",
            record(
                "Unpatched scan tools and shop management platforms carry publicly known vulnerabilities that vendors have already fixed.",
                "Attackers scan for outdated software versions and use off-the-shelf exploit kits against them; a stale J2534 pass-thru driver or DMS install is an open door.",
                "A compromised diagnostic workstation can push malicious firmware to customer vehicles or leak the service history tied to their VINs.",
                "FTC Safeguards Rule requires maintenance of a vulnerability management program; ISO/SAE 21434 expects managed cybersecurity throughout the vehicle service lifecycle.",
                "I can set up an update schedule for your tools and software, including a monthly check of vendor security bulletins.",
            ),
        ),
        (
            "Do you require strong, unique passwords for every system and account in your shop?",
            record(
                "Shared or reused passwords mean one leaked credential unlocks every system it was reused on.",
                "Credential-stuffing tools replay passwords from unrelated breaches against your email, DMS, and supplier portals until one works.",
                "An attacker with your portal login can read every customer record you keep, including addresses and payment details.",
                "FTC Safeguards Rule requires access controls that authenticate users; most state breach statutes treat credential compromise as a reportable event.",
                "I can help you roll out a password manager across the shop and retire shared logins without disrupting the front desk.",
            ),
        ),
        (
            "Do you use multi-factor authentication for email, banking, and remote access accounts?",
            record(
                "A password alone is routinely phished or guessed; a second factor stops a stolen password from becoming a takeover.",
                "A convincing invoice email harvests an employee's password, and without MFA the attacker is reading your mailbox and wiring money the same afternoon.",
                "Business email compromise lets attackers invoice your customers from your own address, destroying trust built over years.",
                "FTC Safeguards Rule explicitly requires multi-factor authentication for access to customer information systems.",
                "I can enable MFA on your email, banking, and remote-access accounts in a single visit, with backup codes stored safely.",
            ),
        ),
        (
            "Is customer and vehicle data encrypted both in storage and during transmission?",
            record(
                "Plaintext customer and vehicle records are readable by anyone who reaches the disk or the wire, not just the application.",
                "A stolen back-office PC or an intercepted sync to a cloud DMS yields names, VINs, and card data with zero extra effort when nothing is encrypted.",
                "Customers whose records leak face identity theft and targeted scams referencing their actual vehicle and service history.",
                "FTC Safeguards Rule requires encryption of customer information at rest and in transit; PCI DSS mandates it for cardholder data.",
                "I can audit where customer data lives in your shop and turn on disk and transport encryption where it is missing.",
            ),
        ),
        (
            "Do you back up business-critical data regularly and test that backups can be restored?",
            record(
                "Backups you have never restored are hope, not a plan; ransomware counts on victims who cannot recover.",
                "Ransomware operators encrypt your DMS database and your only copy of it in one pass, then price the ransom against your daily revenue.",
                "A shop that loses its records loses appointments, warranty history, and open repair orders; customers bear the delays and lost paperwork.",
                "FTC Safeguards Rule expects procedures to maintain the availability of customer information; many cyber insurance policies require tested backups.",
                "I can stand up automatic off-site backups for your critical systems and run a restore drill with you each quarter.",
            ),
        ),
        (
            "Is your shop Wi-Fi segmented so that customer and guest devices cannot reach business systems?",
            record(
                "A flat network means the phone in your waiting room sits on the same wire as your diagnostic laptops and point of sale.",
                "An attacker parks outside, joins the guest Wi-Fi, and pivots straight to unpatched shop equipment because nothing separates the two.",
                "Devices customers connect in good faith become the beachhead that exposes other customers' records and vehicles in your bays.",
                "FTC Safeguards Rule calls for access controls limiting connections to customer information; network segmentation is the baseline control.",
                "I can reconfigure your router for separate guest and business networks, usually without new hardware.",
            ),
        ),
        (
            "Do you train employees to recognize phishing emails and social engineering attempts?",
            record(
                "Nearly every shop compromise starts with a person, not a firewall; untrained staff cannot flag what they have never seen.",
                "A caller posing as your parts supplier asks the service writer to 'confirm' portal credentials, and the attacker logs in before lunch.",
                "One click on a fake shipping notice can expose every customer record the front desk can see.",
                "FTC Safeguards Rule requires security awareness training for personnel; it is also the cheapest control on this list.",
                "I can run a short, shop-specific training session with real phishing examples from the automotive aftermarket.",
            ),
        ),
        (
            "Do you review the security practices of the vendors and software providers you rely on?",
            record(
                "Your security ceiling is set by the sloppiest vendor with access to your systems or data.",
                "Attackers breach a small DMS or telematics provider once and inherit remote access to every shop that installed it.",
                "Customers do not distinguish between your shop and your vendor; a supplier breach that leaks their data is your breach to them.",
                "FTC Safeguards Rule requires overseeing service providers by contract and periodic assessment.",
                "I can put together a one-page security questionnaire for your vendors and review the answers with you.",
            ),
        ),
        (
            "Do you have a written incident response plan for handling a cyber attack or data breach?",
            record(
                "The first hours of an incident decide its cost, and improvising under pressure wastes them.",
                "Attackers rely on confusion: while staff debate who to call, the intrusion spreads from one terminal to the whole shop.",
                "Without a plan, customer notification comes late and disorganized, compounding the harm and the reputational damage.",
                "Most state breach notification laws set hard deadlines; FTC Safeguards Rule requires a written incident response plan outright.",
                "I can draft an incident response plan sized for your shop, with a one-page checklist to keep by the front desk.",
            ),
        ),
        (
            "Do you restrict who can connect to vehicle diagnostic ports and telematics interfaces?",
            record(
                "The OBD-II port and telematics links are direct lines into vehicle control systems, and tools left connected are tools anyone can use.",
                "A malicious dongle slipped onto a vehicle in your lot, or an unattended pass-thru session, gives an attacker persistent access to the vehicle's network.",
                "A customer whose car is tampered with while in your care faces safety risk, not just data loss; that is an existential liability for the shop.",
                "ISO/SAE 21434 and NHTSA cybersecurity best practices both address securing diagnostic access to vehicle systems.",
                "I can help you set physical and procedural controls for diagnostic equipment, from locked storage to session sign-out.",
            ),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_lookup_known_question() {
        let table = GuidanceTable::standard();
        let record = table
            .lookup("Do you train employees to recognize phishing emails and social engineering attempts?");
        assert_ne!(record, GuidanceRecord::fallback());
        assert!(record.rationale.contains("person"));
    }

    #[test]
    fn test_lookup_unknown_question_falls_back() {
        let table = GuidanceTable::standard();
        let record = table.lookup("Do you sweep the workshop floor?");
        assert_eq!(record, GuidanceRecord::fallback());
        assert_eq!(record.rationale, "No explanation provided.");
        assert_eq!(record.exploitation_scenario, "No data.");
        assert_eq!(record.client_impact, "No impact info.");
        assert_eq!(record.compliance_reference, "Compliance guidance unavailable.");
        assert_eq!(
            record.assistance_offer,
            "I can assist with strengthening this area."
        );
    }

    #[test]
    fn test_empty_table_is_total() {
        let table = GuidanceTable::new(HashMap::new());
        assert!(table.is_empty());
        assert_eq!(table.lookup("anything"), GuidanceRecord::fallback());
    }

    #[test]
    fn test_standard_table_covers_standard_catalog() {
        let table = GuidanceTable::standard();
        let fallback = GuidanceRecord::fallback();
        for question in Catalog::standard().questions() {
            assert_ne!(
                table.lookup(question),
                fallback,
                "missing guidance for: {question}"
            );
        }
    }
}
