//! Quesnel demo data

use crate::{Category, Contact, Faq, GeoPoint, Place, StatusColor};

pub(crate) const CENTER: GeoPoint = GeoPoint {
    lat: 52.9784,
    lng: -122.4931,
};

pub(crate) fn places() -> Vec<Place> {
    vec![
        Place {
            id: "gr-baker".to_string(),
            name: "G.R. Baker Memorial".to_string(),
            category: Category::Hospital,
            type_label: "Emergency Room • 24/7".to_string(),
            address: "543 Front Street, Quesnel, BC V2J 2K7".to_string(),
            phone: "(250) 985-5600".to_string(),
            hours: None,
            lat: 52.9784,
            lng: -122.4931,
            open_now: true,
            status_label: "Open Now".to_string(),
            status_color: StatusColor::Green,
            wait_mins: Some(25),
            closes_label: None,
        },
        Place {
            id: "primary-care".to_string(),
            name: "Quesnel Primary Care".to_string(),
            category: Category::Clinic,
            type_label: "Walk-in Clinic".to_string(),
            address: "644 Front Street, Quesnel, BC V2J 2K8".to_string(),
            phone: "(250) 992-8322".to_string(),
            hours: None,
            lat: 52.9793,
            lng: -122.4920,
            open_now: false,
            status_label: "Closes 5pm".to_string(),
            status_color: StatusColor::Orange,
            wait_mins: None,
            closes_label: Some("Closes 5pm".to_string()),
        },
        Place {
            id: "upcc".to_string(),
            name: "Quesnel UPCC".to_string(),
            category: Category::UrgentCare,
            type_label: "Urgent & Primary Care".to_string(),
            address: "Quesnel, BC (call to book)".to_string(),
            phone: "(250) 991-7571".to_string(),
            hours: Some("Mon–Fri 12pm–8pm; Weekends/Holidays 10am–2pm".to_string()),
            lat: 52.9810,
            lng: -122.4950,
            open_now: true,
            status_label: "Open Now".to_string(),
            status_color: StatusColor::Green,
            wait_mins: Some(25),
            closes_label: None,
        },
        Place {
            id: "shoppers".to_string(),
            name: "Shoppers Drug Mart".to_string(),
            category: Category::Pharmacy,
            type_label: "Pharmacy".to_string(),
            address: "225 St. Laurent Ave, Quesnel, BC V2J 2C8".to_string(),
            phone: "(250) 992-2214".to_string(),
            hours: None,
            lat: 52.9770,
            lng: -122.4870,
            open_now: true,
            status_label: "Open".to_string(),
            status_color: StatusColor::Green,
            wait_mins: None,
            closes_label: None,
        },
    ]
}

pub(crate) fn faqs() -> Vec<Faq> {
    let faq = |question: &str, answer: &str| Faq {
        question: question.to_string(),
        answer: answer.to_string(),
    };

    vec![
        faq(
            "Do I need a referral?",
            "For most walk-in clinics in Quesnel, you do not need a referral. However, \
             specialists typically require a referral from a family doctor.",
        ),
        faq(
            "What are the wait times?",
            "Wait times vary by facility and time of day. The ER triages based on severity. \
             It's best to call ahead for clinics if possible.",
        ),
        faq(
            "Is there a walk-in clinic open on weekends?",
            "The Quesnel UPCC is open on weekends and holidays from 10am–2pm. The hospital ER \
             is always open 24/7.",
        ),
        faq(
            "Can I get a prescription refill without a doctor?",
            "Pharmacists in BC can renew most prescriptions for a short period. Contact \
             Shoppers Drug Mart or another local pharmacy to ask.",
        ),
    ]
}

pub(crate) fn contacts() -> Vec<Contact> {
    let contact = |name: &str, description: &str, label: &str, href: &str| Contact {
        name: name.to_string(),
        description: description.to_string(),
        label: label.to_string(),
        href: href.to_string(),
    };

    vec![
        contact(
            "Emergency (911)",
            "For life-threatening emergencies, fire, or police.",
            "Call 911",
            "tel:911",
        ),
        contact(
            "HealthLink BC (811)",
            "24/7 non-emergency health advice from a nurse.",
            "Call 811",
            "tel:811",
        ),
        contact(
            "Crisis Line",
            "24-hour mental health support and suicide prevention.",
            "Call Crisis Line",
            "tel:18007842433",
        ),
    ]
}
