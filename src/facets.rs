//! Facet registry: every targeting facet the backend understands, keyed by
//! URN. Fixed-value facets enumerate their values here; typeahead facets are
//! searched dynamically through the `/typeahead` endpoint. Both validation
//! and the facet-listing tools read this one table.

pub struct FacetValue {
    pub value: &'static str,
    pub description: &'static str,
}

pub struct FixedFacet {
    pub urn: &'static str,
    pub description: &'static str,
    pub values: &'static [FacetValue],
}

pub struct TypeaheadFacet {
    pub urn: &'static str,
    pub description: &'static str,
}

pub fn fixed_facet(urn: &str) -> Option<&'static FixedFacet> {
    FIXED_FACETS.iter().find(|facet| facet.urn == urn)
}

pub fn is_typeahead_facet(urn: &str) -> bool {
    TYPEAHEAD_FACETS.iter().any(|facet| facet.urn == urn)
}

pub const TYPEAHEAD_FACETS: &[TypeaheadFacet] = &[
    TypeaheadFacet {
        urn: "urn:li:adTargetingFacet:locations",
        description: "Geographic locations",
    },
    TypeaheadFacet {
        urn: "urn:li:adTargetingFacet:profileLocations",
        description: "Profile locations",
    },
    TypeaheadFacet {
        urn: "urn:li:adTargetingFacet:titles",
        description: "Current job titles",
    },
    TypeaheadFacet {
        urn: "urn:li:adTargetingFacet:titlesPast",
        description: "Past job titles",
    },
    TypeaheadFacet {
        urn: "urn:li:adTargetingFacet:employersPast",
        description: "Past employers",
    },
    TypeaheadFacet {
        urn: "urn:li:adTargetingFacet:followedCompanies",
        description: "Companies followed by users",
    },
    TypeaheadFacet {
        urn: "urn:li:adTargetingFacet:interests",
        description: "User interests",
    },
    TypeaheadFacet {
        urn: "urn:li:adTargetingFacet:skills",
        description: "Professional skills",
    },
    TypeaheadFacet {
        urn: "urn:li:adTargetingFacet:employers",
        description: "Current employers",
    },
    TypeaheadFacet {
        urn: "urn:li:adTargetingFacet:degrees",
        description: "Educational degrees",
    },
    TypeaheadFacet {
        urn: "urn:li:adTargetingFacet:memberBehaviors",
        description: "Member behaviors",
    },
    TypeaheadFacet {
        urn: "urn:li:adTargetingFacet:schools",
        description: "Educational institutions",
    },
    TypeaheadFacet {
        urn: "urn:li:adTargetingFacet:companyCategory",
        description: "Company categories",
    },
    TypeaheadFacet {
        urn: "urn:li:adTargetingFacet:titlesAll",
        description: "All job titles (current and past)",
    },
    TypeaheadFacet {
        urn: "urn:li:adTargetingFacet:industries",
        description: "Industries",
    },
    TypeaheadFacet {
        urn: "urn:li:adTargetingFacet:groups",
        description: "LinkedIn groups",
    },
    TypeaheadFacet {
        urn: "urn:li:adTargetingFacet:firstDegreeConnectionCompanies",
        description: "Companies with first-degree connections",
    },
    TypeaheadFacet {
        urn: "urn:li:adTargetingFacet:employersAll",
        description: "All employers (current and past)",
    },
    TypeaheadFacet {
        urn: "urn:li:adTargetingFacet:fieldsOfStudy",
        description: "Fields of study",
    },
];

pub const FIXED_FACETS: &[FixedFacet] = &[
    FixedFacet {
        urn: "urn:li:adTargetingFacet:genders",
        description: "Gender targeting",
        values: &[
            FacetValue {
                value: "urn:li:gender:FEMALE",
                description: "Female",
            },
            FacetValue {
                value: "urn:li:gender:MALE",
                description: "Male",
            },
        ],
    },
    FixedFacet {
        urn: "urn:li:adTargetingFacet:ageRanges",
        description: "Age range targeting",
        values: &[
            FacetValue {
                value: "urn:li:ageRange:(18,24)",
                description: "18-24 years",
            },
            FacetValue {
                value: "urn:li:ageRange:(25,34)",
                description: "25-34 years",
            },
            FacetValue {
                value: "urn:li:ageRange:(35,54)",
                description: "35-54 years",
            },
            FacetValue {
                value: "urn:li:ageRange:(55,2147483647)",
                description: "55+ years",
            },
        ],
    },
    FixedFacet {
        urn: "urn:li:adTargetingFacet:seniorities",
        description: "Seniority targeting",
        values: &[
            FacetValue {
                value: "urn:li:seniority:1",
                description: "Entry level",
            },
            FacetValue {
                value: "urn:li:seniority:2",
                description: "Senior",
            },
            FacetValue {
                value: "urn:li:seniority:3",
                description: "Manager",
            },
            FacetValue {
                value: "urn:li:seniority:4",
                description: "Director",
            },
            FacetValue {
                value: "urn:li:seniority:5",
                description: "VP",
            },
            FacetValue {
                value: "urn:li:seniority:6",
                description: "CXO",
            },
            FacetValue {
                value: "urn:li:seniority:7",
                description: "Owner",
            },
            FacetValue {
                value: "urn:li:seniority:8",
                description: "Partner",
            },
            FacetValue {
                value: "urn:li:seniority:9",
                description: "Unpaid",
            },
            FacetValue {
                value: "urn:li:seniority:10",
                description: "Training",
            },
        ],
    },
    FixedFacet {
        urn: "urn:li:adTargetingFacet:revenue",
        description: "Company revenue targeting",
        values: &[
            FacetValue {
                value: "urn:li:revenue:(-2147483647,1)",
                description: "Less than $1 million",
            },
            FacetValue {
                value: "urn:li:revenue:(1,10)",
                description: "$1-10 million",
            },
            FacetValue {
                value: "urn:li:revenue:(10,100)",
                description: "$10-100 million",
            },
            FacetValue {
                value: "urn:li:revenue:(100,1000)",
                description: "$100 million-1 billion",
            },
            FacetValue {
                value: "urn:li:revenue:(1000,2147483647)",
                description: "More than $1 billion",
            },
        ],
    },
    FixedFacet {
        urn: "urn:li:adTargetingFacet:growthRate",
        description: "Company growth rate targeting",
        values: &[
            FacetValue {
                value: "urn:li:growthRate:(-2147483647,0)",
                description: "Negative growth",
            },
            FacetValue {
                value: "urn:li:growthRate:(0,3)",
                description: "0-3% growth",
            },
            FacetValue {
                value: "urn:li:growthRate:(3,10)",
                description: "3-10% growth",
            },
            FacetValue {
                value: "urn:li:growthRate:(10,20)",
                description: "10-20% growth",
            },
            FacetValue {
                value: "urn:li:growthRate:(20,2147483647)",
                description: "More than 20% growth",
            },
        ],
    },
    FixedFacet {
        urn: "urn:li:adTargetingFacet:yearsOfExperienceRanges",
        description: "Years of experience targeting",
        values: &[
            FacetValue {
                value: "urn:li:yearsOfExperience:1",
                description: "1 year",
            },
            FacetValue {
                value: "urn:li:yearsOfExperience:2",
                description: "2 years",
            },
            FacetValue {
                value: "urn:li:yearsOfExperience:3",
                description: "3 years",
            },
            FacetValue {
                value: "urn:li:yearsOfExperience:4",
                description: "4 years",
            },
            FacetValue {
                value: "urn:li:yearsOfExperience:5",
                description: "5 years",
            },
            FacetValue {
                value: "urn:li:yearsOfExperience:6",
                description: "6 years",
            },
            FacetValue {
                value: "urn:li:yearsOfExperience:7",
                description: "7 years",
            },
            FacetValue {
                value: "urn:li:yearsOfExperience:8",
                description: "8 years",
            },
            FacetValue {
                value: "urn:li:yearsOfExperience:9",
                description: "9 years",
            },
            FacetValue {
                value: "urn:li:yearsOfExperience:10",
                description: "10 years",
            },
            FacetValue {
                value: "urn:li:yearsOfExperience:11",
                description: "11 years",
            },
            FacetValue {
                value: "urn:li:yearsOfExperience:12",
                description: "12+ years",
            },
        ],
    },
    FixedFacet {
        urn: "urn:li:adTargetingFacet:staffCountRanges",
        description: "Company size targeting",
        values: &[
            FacetValue {
                value: "urn:li:staffCountRange:(1,1)",
                description: "Self-employed",
            },
            FacetValue {
                value: "urn:li:staffCountRange:(2,10)",
                description: "2-10 employees",
            },
            FacetValue {
                value: "urn:li:staffCountRange:(11,50)",
                description: "11-50 employees",
            },
            FacetValue {
                value: "urn:li:staffCountRange:(51,200)",
                description: "51-200 employees",
            },
            FacetValue {
                value: "urn:li:staffCountRange:(201,500)",
                description: "201-500 employees",
            },
            FacetValue {
                value: "urn:li:staffCountRange:(501,1000)",
                description: "501-1,000 employees",
            },
            FacetValue {
                value: "urn:li:staffCountRange:(1001,5000)",
                description: "1,001-5,000 employees",
            },
            FacetValue {
                value: "urn:li:staffCountRange:(5001,10000)",
                description: "5,001-10,000 employees",
            },
            FacetValue {
                value: "urn:li:staffCountRange:(10001,2147483647)",
                description: "10,001+ employees",
            },
        ],
    },
    FixedFacet {
        urn: "urn:li:adTargetingFacet:jobFunctions",
        description: "Job function targeting",
        values: &[
            FacetValue {
                value: "urn:li:function:1",
                description: "Accounting",
            },
            FacetValue {
                value: "urn:li:function:2",
                description: "Administrative",
            },
            FacetValue {
                value: "urn:li:function:3",
                description: "Arts and Design",
            },
            FacetValue {
                value: "urn:li:function:4",
                description: "Business Development",
            },
            FacetValue {
                value: "urn:li:function:5",
                description: "Community and Social Services",
            },
            FacetValue {
                value: "urn:li:function:6",
                description: "Consulting",
            },
            FacetValue {
                value: "urn:li:function:7",
                description: "Education",
            },
            FacetValue {
                value: "urn:li:function:8",
                description: "Engineering",
            },
            FacetValue {
                value: "urn:li:function:9",
                description: "Entrepreneurship",
            },
            FacetValue {
                value: "urn:li:function:10",
                description: "Finance",
            },
            FacetValue {
                value: "urn:li:function:11",
                description: "Healthcare Services",
            },
            FacetValue {
                value: "urn:li:function:12",
                description: "Human Resources",
            },
            FacetValue {
                value: "urn:li:function:13",
                description: "Information Technology",
            },
            FacetValue {
                value: "urn:li:function:14",
                description: "Legal",
            },
            FacetValue {
                value: "urn:li:function:15",
                description: "Marketing",
            },
            FacetValue {
                value: "urn:li:function:16",
                description: "Media and Communication",
            },
            FacetValue {
                value: "urn:li:function:17",
                description: "Military and Protective Services",
            },
            FacetValue {
                value: "urn:li:function:18",
                description: "Operations",
            },
            FacetValue {
                value: "urn:li:function:19",
                description: "Product Management",
            },
            FacetValue {
                value: "urn:li:function:20",
                description: "Program and Project Management",
            },
            FacetValue {
                value: "urn:li:function:21",
                description: "Purchasing",
            },
            FacetValue {
                value: "urn:li:function:22",
                description: "Quality Assurance",
            },
            FacetValue {
                value: "urn:li:function:23",
                description: "Real Estate",
            },
            FacetValue {
                value: "urn:li:function:24",
                description: "Research",
            },
            FacetValue {
                value: "urn:li:function:25",
                description: "Sales",
            },
            FacetValue {
                value: "urn:li:function:26",
                description: "Support",
            },
        ],
    },
    FixedFacet {
        urn: "urn:li:adTargetingFacet:interfaceLocales",
        description: "Interface language targeting",
        values: &[
            FacetValue {
                value: "urn:li:locale:ar_AE",
                description: "Arabic",
            },
            FacetValue {
                value: "urn:li:locale:cs_CZ",
                description: "Czech",
            },
            FacetValue {
                value: "urn:li:locale:da_DK",
                description: "Danish",
            },
            FacetValue {
                value: "urn:li:locale:nl_NL",
                description: "Dutch",
            },
            FacetValue {
                value: "urn:li:locale:en_US",
                description: "English",
            },
            FacetValue {
                value: "urn:li:locale:fr_FR",
                description: "French",
            },
            FacetValue {
                value: "urn:li:locale:de_DE",
                description: "German",
            },
            FacetValue {
                value: "urn:li:locale:in_ID",
                description: "Indonesian",
            },
            FacetValue {
                value: "urn:li:locale:it_IT",
                description: "Italian",
            },
            FacetValue {
                value: "urn:li:locale:ja_JP",
                description: "Japanese",
            },
            FacetValue {
                value: "urn:li:locale:ko_KR",
                description: "Korean",
            },
            FacetValue {
                value: "urn:li:locale:ms_MY",
                description: "Malay",
            },
            FacetValue {
                value: "urn:li:locale:no_NO",
                description: "Norwegian",
            },
            FacetValue {
                value: "urn:li:locale:pl_PL",
                description: "Polish",
            },
            FacetValue {
                value: "urn:li:locale:pt_BR",
                description: "Portuguese",
            },
            FacetValue {
                value: "urn:li:locale:ro_RO",
                description: "Romanian",
            },
            FacetValue {
                value: "urn:li:locale:ru_RU",
                description: "Russian",
            },
            FacetValue {
                value: "urn:li:locale:es_ES",
                description: "Spanish",
            },
            FacetValue {
                value: "urn:li:locale:sv_SE",
                description: "Swedish",
            },
            FacetValue {
                value: "urn:li:locale:tr_TR",
                description: "Turkish",
            },
            FacetValue {
                value: "urn:li:locale:hi_IN",
                description: "Hindi",
            },
        ],
    },
];
