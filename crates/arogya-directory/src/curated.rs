//! The fixed curated facility list.
//!
//! Hand-entered partner facilities with stable identifiers: the `f*` range
//! is the featured Ahmedabad set, the `a*` range covers Anand city. Curated
//! entries are always present in the directory regardless of the amenity
//! query's radius or outcome.

use arogya_core::types::{Coordinate, Facility, FacilityKind, GovernmentCards};

struct CuratedSpec {
    id: &'static str,
    name: &'static str,
    lat: f64,
    lon: f64,
    kind: FacilityKind,
    specialty: Option<&'static str>,
    certifications: Option<&'static str>,
    contact: &'static str,
    cashless: &'static str,
    benefit: &'static str,
    ayushman: bool,
    maa: bool,
    city: Option<&'static str>,
}

const CURATED: &[CuratedSpec] = &[
    CuratedSpec {
        id: "f1",
        name: "Elite Orthopaedic & Womens Hospital",
        lat: 23.0175,
        lon: 72.4822,
        kind: FacilityKind::Hospital,
        specialty: Some("Orthopaedic & Womens"),
        certifications: Some("NABH Certified"),
        contact: "9824623823",
        cashless: "No",
        benefit: "Advanced Orthopaedic & Gynaecology Care",
        ayushman: true,
        maa: true,
        city: None,
    },
    CuratedSpec {
        id: "f2",
        name: "Sannidhya Gynaec Hospital",
        lat: 22.9962,
        lon: 72.5996,
        kind: FacilityKind::Hospital,
        specialty: Some("Gynaecology"),
        certifications: Some("Multispeciality"),
        contact: "7575890555",
        cashless: "Yes",
        benefit: "Comprehensive Women's Healthcare",
        ayushman: true,
        maa: true,
        city: None,
    },
    CuratedSpec {
        id: "f3",
        name: "Khusboo Orthopaedic Hospital",
        lat: 23.0200,
        lon: 72.5081,
        kind: FacilityKind::Hospital,
        specialty: Some("Orthopaedic"),
        certifications: Some("Specialist Care"),
        contact: "7575890555",
        cashless: "Yes",
        benefit: "Expert Orthopaedic Surgery",
        ayushman: true,
        maa: false,
        city: None,
    },
    CuratedSpec {
        id: "f4",
        name: "Star Hospital",
        lat: 23.0374,
        lon: 72.6300,
        kind: FacilityKind::Hospital,
        specialty: Some("Multispeciality"),
        certifications: Some("Government Approved"),
        contact: "9898394943",
        cashless: "Yes (12 companies)",
        benefit: "24/7 Emergency & Critical Care",
        ayushman: true,
        maa: true,
        city: None,
    },
    CuratedSpec {
        id: "f5",
        name: "Anand Orthopaedic Hospital",
        lat: 23.0550,
        lon: 72.6310,
        kind: FacilityKind::Hospital,
        specialty: Some("Orthopaedic"),
        certifications: Some("High Quality Care"),
        contact: "7922201717",
        cashless: "Yes",
        benefit: "Bone and Joint Specialists",
        ayushman: true,
        maa: false,
        city: None,
    },
    CuratedSpec {
        id: "f6",
        name: "Avira Hospital",
        lat: 23.0225,
        lon: 72.5714,
        kind: FacilityKind::Hospital,
        specialty: Some("Medicine & Skin Care"),
        certifications: Some("Dermatology Focus"),
        contact: "2692267321",
        cashless: "Yes",
        benefit: "General Medicine & Skin Experts",
        ayushman: false,
        maa: false,
        city: None,
    },
    CuratedSpec {
        id: "f7",
        name: "Thesia General Hospital",
        lat: 23.0475,
        lon: 72.5133,
        kind: FacilityKind::Hospital,
        specialty: Some("Physician & Gynaecology"),
        certifications: Some("Obstetrics Care"),
        contact: "7359354201",
        cashless: "Yes",
        benefit: "General Medicine & Maternity",
        ayushman: true,
        maa: true,
        city: None,
    },
    CuratedSpec {
        id: "a1",
        name: "Shree Krishna Hospital",
        lat: 22.5645,
        lon: 72.9289,
        kind: FacilityKind::Hospital,
        specialty: Some("Multispeciality"),
        certifications: Some("NABH Certified"),
        contact: "02692-268000",
        cashless: "Yes",
        benefit: "Attached to Pramukh Swami Medical College",
        ayushman: true,
        maa: true,
        city: Some("Anand"),
    },
    CuratedSpec {
        id: "a2",
        name: "Anand Surgical Hospital",
        lat: 22.5580,
        lon: 72.9550,
        kind: FacilityKind::Hospital,
        specialty: Some("Surgery & Critical Care"),
        certifications: Some("Advanced Surgical Care"),
        contact: "02692-243535",
        cashless: "Yes",
        benefit: "Emergency & Trauma Center",
        ayushman: true,
        maa: true,
        city: Some("Anand"),
    },
    CuratedSpec {
        id: "a3",
        name: "Santram Hospital",
        lat: 22.5500,
        lon: 72.9400,
        kind: FacilityKind::Hospital,
        specialty: Some("Multispeciality"),
        certifications: Some("Charitable Trust"),
        contact: "02692-250480",
        cashless: "Yes",
        benefit: "Affordable Healthcare for All",
        ayushman: true,
        maa: true,
        city: Some("Anand"),
    },
    CuratedSpec {
        id: "a4",
        name: "Dr. Jivraj Mehta Hospital",
        lat: 22.5620,
        lon: 72.9320,
        kind: FacilityKind::Hospital,
        specialty: Some("Orthopaedic & General Surgery"),
        certifications: Some("Specialist Care"),
        contact: "02692-251234",
        cashless: "Yes",
        benefit: "Expert Orthopaedic Treatment",
        ayushman: true,
        maa: false,
        city: Some("Anand"),
    },
    CuratedSpec {
        id: "a5",
        name: "Nidhi Women's Hospital",
        lat: 22.5660,
        lon: 72.9450,
        kind: FacilityKind::Hospital,
        specialty: Some("Gynaecology & Obstetrics"),
        certifications: Some("Women's Care Specialist"),
        contact: "02692-268500",
        cashless: "Yes",
        benefit: "Complete Maternity & Women's Health",
        ayushman: true,
        maa: true,
        city: Some("Anand"),
    },
    CuratedSpec {
        id: "a6",
        name: "Radha Medical Store",
        lat: 22.5590,
        lon: 72.9380,
        kind: FacilityKind::Pharmacy,
        specialty: Some("24/7 Pharmacy"),
        certifications: None,
        contact: "02692-245000",
        cashless: "No",
        benefit: "All medicines available round the clock",
        ayushman: false,
        maa: false,
        city: Some("Anand"),
    },
    CuratedSpec {
        id: "a7",
        name: "Apollo Pharmacy Anand",
        lat: 22.5530,
        lon: 72.9520,
        kind: FacilityKind::Pharmacy,
        specialty: Some("Retail Pharmacy"),
        certifications: None,
        contact: "02692-242000",
        cashless: "No",
        benefit: "Trusted brand with genuine medicines",
        ayushman: false,
        maa: false,
        city: Some("Anand"),
    },
    CuratedSpec {
        id: "a8",
        name: "Pushpanjali Eye Hospital",
        lat: 22.5700,
        lon: 72.9350,
        kind: FacilityKind::Hospital,
        specialty: Some("Ophthalmology"),
        certifications: Some("Eye Care Specialist"),
        contact: "02692-267890",
        cashless: "Yes",
        benefit: "Advanced Eye Surgery & Treatment",
        ayushman: true,
        maa: false,
        city: Some("Anand"),
    },
];

/// The curated facility list, in its fixed order.
pub fn curated_facilities() -> Vec<Facility> {
    CURATED
        .iter()
        .map(|spec| Facility {
            id: spec.id.to_string(),
            name: spec.name.to_string(),
            coordinate: Coordinate::new(spec.lat, spec.lon),
            kind: spec.kind,
            specialty: spec.specialty.map(str::to_string),
            certifications: spec.certifications.map(str::to_string),
            contact: Some(spec.contact.to_string()),
            cashless_policy: Some(spec.cashless.to_string()),
            benefit_description: Some(spec.benefit.to_string()),
            government_card_flags: GovernmentCards {
                ayushman: spec.ayushman,
                maa: spec.maa,
            },
            source_city: spec.city.map(str::to_string),
        })
        .collect()
}
