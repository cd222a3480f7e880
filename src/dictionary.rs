//! Per-(version, release) tag dictionary for TAP3.
//!
//! Only (3, 11) is populated; any other release resolves no entries.

/// The decoded shape a dictionary entry's primitive payload takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Group,
    Integer,
    Integer64,
    OctetString,
    BcdString,
}

/// One dictionary row: the BER tag, the field name it projects to, and its type.
pub type Entry = (u64, &'static str, FieldType);

// Transcribed verbatim from the TAP 3.11 lookup table, sorted ascending by tag
// for binary search (the source stores it in declaration order, not tag order).
static TAP_3_11: &[Entry] = &[
    (1, "TransferBatch", FieldType::Group),
    (2, "Notification", FieldType::Group),
    (3, "CallEventDetailList", FieldType::Group),
    (4, "BatchControlInfo", FieldType::Group),
    (5, "AccountingInfo", FieldType::Group),
    (6, "NetworkInfo", FieldType::Group),
    (8, "MessageDescriptionInfoList", FieldType::Group),
    (9, "MobileOriginatedCall", FieldType::Group),
    (10, "MobileTerminatedCall", FieldType::Group),
    (11, "SupplServiceEvent", FieldType::Group),
    (12, "ServiceCentreUsage", FieldType::Group),
    (14, "GprsCall", FieldType::Group),
    (15, "AuditControlInfo", FieldType::Group),
    (16, "LocalTimeStamp", FieldType::OctetString),
    (17, "ContentTransaction", FieldType::Group),
    (36, "BasicService", FieldType::Group),
    (37, "BasicServiceCodeList", FieldType::Group),
    (38, "BasicServiceUsedList", FieldType::Group),
    (39, "BasicServiceUsed", FieldType::Group),
    (40, "BearerServiceCode", FieldType::OctetString),
    (41, "CallOriginator", FieldType::Group),
    (42, "CalledPlace", FieldType::OctetString),
    (43, "CallEventDetailsCount", FieldType::Integer),
    (44, "CallEventStartTimeStamp", FieldType::Group),
    (45, "CallReference", FieldType::Integer),
    (46, "CalledRegion", FieldType::OctetString),
    (55, "CamelServiceKey", FieldType::Integer),
    (56, "CamelServiceLevel", FieldType::Integer),
    (57, "CamelServiceUsed", FieldType::Group),
    (58, "CauseForTerm", FieldType::Integer),
    (59, "CellId", FieldType::Integer),
    (62, "Charge", FieldType::Integer),
    (63, "ChargeDetail", FieldType::Group),
    (64, "ChargeDetailList", FieldType::Group),
    (65, "ChargeableUnits", FieldType::Integer),
    (66, "ChargedItem", FieldType::OctetString),
    (67, "ChargedPartyStatus", FieldType::Integer),
    (68, "ChargedUnits", FieldType::Integer),
    (69, "ChargeInformation", FieldType::Group),
    (70, "ChargeInformationList", FieldType::Group),
    (71, "ChargeType", FieldType::OctetString),
    (72, "ChargingId", FieldType::Integer),
    (73, "ChargingPoint", FieldType::OctetString),
    (74, "ChargingTimeStamp", FieldType::Group),
    (75, "ClirIndicator", FieldType::Integer),
    (76, "CompletionTimeStamp", FieldType::Group),
    (79, "CseInformation", FieldType::OctetString),
    (80, "CurrencyConversionList", FieldType::Group),
    (87, "DefaultCallHandlingIndicator", FieldType::Integer),
    (88, "DepositTimeStamp", FieldType::Group),
    (89, "Destination", FieldType::Group),
    (90, "DestinationNetwork", FieldType::OctetString),
    (91, "DiscountCode", FieldType::Integer),
    (92, "DiscountRate", FieldType::Integer),
    (94, "Discounting", FieldType::Group),
    (95, "DiscountingList", FieldType::Group),
    (96, "DiscountInformation", FieldType::Group),
    (98, "DistanceChargeBandCode", FieldType::OctetString),
    (101, "EarliestCallTimeStamp", FieldType::Group),
    (103, "Esn", FieldType::OctetString),
    (104, "ExchangeRate", FieldType::Integer),
    (105, "ExchangeRateCode", FieldType::Integer),
    (106, "CurrencyConversion", FieldType::Group),
    (107, "FileAvailableTimeStamp", FieldType::Group),
    (108, "FileCreationTimeStamp", FieldType::Group),
    (109, "FileSequenceNumber", FieldType::OctetString),
    (110, "FileTypeIndicator", FieldType::OctetString),
    (111, "Fnur", FieldType::Integer),
    (113, "GeographicalLocation", FieldType::Group),
    (114, "GprsBasicCallInformation", FieldType::Group),
    (115, "GprsChargeableSubscriber", FieldType::Group),
    (116, "GprsDestination", FieldType::Group),
    (117, "GprsLocationInformation", FieldType::Group),
    (118, "GprsNetworkLocation", FieldType::Group),
    (121, "GprsServiceUsed", FieldType::Group),
    (122, "HomeBid", FieldType::OctetString),
    (123, "HomeLocationInformation", FieldType::Group),
    (128, "Imei", FieldType::BcdString),
    (129, "Imsi", FieldType::BcdString),
    (133, "LatestCallTimeStamp", FieldType::Group),
    (135, "LocalCurrency", FieldType::OctetString),
    (136, "LocationArea", FieldType::Integer),
    (138, "LocationInformation", FieldType::Group),
    (141, "MessageDescriptionCode", FieldType::Integer),
    (142, "MessageDescription", FieldType::OctetString),
    (143, "MessageDescriptionInformation", FieldType::Group),
    (144, "MessageStatus", FieldType::Integer),
    (145, "MessageType", FieldType::Integer),
    (146, "Min", FieldType::OctetString),
    (147, "MoBasicCallInformation", FieldType::Group),
    (152, "Msisdn", FieldType::Integer),
    (153, "MtBasicCallInformation", FieldType::Group),
    (156, "NetworkLocation", FieldType::Group),
    (159, "NumberOfDecimalPlaces", FieldType::Integer),
    (162, "OperatorSpecInfoList", FieldType::Group),
    (163, "OperatorSpecInformation", FieldType::OctetString),
    (164, "OriginatingNetwork", FieldType::OctetString),
    (165, "PacketDataProtocolAddress", FieldType::OctetString),
    (166, "PartialTypeIndicator", FieldType::OctetString),
    (167, "PdpAddress", FieldType::OctetString),
    (169, "PlmnId", FieldType::OctetString),
    (170, "PriorityCode", FieldType::Integer),
    (181, "RapFileSequenceNumber", FieldType::OctetString),
    (182, "Recipient", FieldType::OctetString),
    (183, "RecEntityInformation", FieldType::Group),
    (184, "RecEntityCode", FieldType::Integer),
    (185, "RecEntityCodeList", FieldType::Group),
    (186, "RecEntityType", FieldType::Integer),
    (188, "RecEntityInfoList", FieldType::Group),
    (189, "ReleaseVersionNumber", FieldType::Integer),
    (191, "ScuBasicInformation", FieldType::Group),
    (192, "ScuChargeType", FieldType::Group),
    (193, "ScuTimeStamps", FieldType::Group),
    (195, "ServingNetwork", FieldType::OctetString),
    (196, "Sender", FieldType::OctetString),
    (198, "ServingBid", FieldType::OctetString),
    (199, "SimChargeableSubscriber", FieldType::Group),
    (200, "SimToolkitIndicator", FieldType::OctetString),
    (201, "SpecificationVersionNumber", FieldType::Integer),
    (204, "SsParameters", FieldType::OctetString),
    (206, "SupplServiceUsed", FieldType::Group),
    (208, "SupplServiceActionCode", FieldType::Integer),
    (209, "SupplServiceCode", FieldType::OctetString),
    (210, "TapCurrency", FieldType::OctetString),
    (211, "TaxationList", FieldType::Group),
    (212, "TaxCode", FieldType::Integer),
    (213, "TaxInformation", FieldType::Group),
    (214, "TaxInformationList", FieldType::Group),
    (215, "TaxRate", FieldType::OctetString),
    (216, "Taxation", FieldType::Group),
    (217, "TaxType", FieldType::OctetString),
    (218, "TeleServiceCode", FieldType::OctetString),
    (219, "ThirdPartyInformation", FieldType::Group),
    (223, "TotalCallEventDuration", FieldType::Integer),
    (225, "TotalDiscountValue", FieldType::Integer),
    (226, "TotalTaxValue", FieldType::Integer),
    (227, "TransferCutOffTimeStamp", FieldType::Group),
    (228, "TransparencyIndicator", FieldType::Integer),
    (231, "UtcTimeOffset", FieldType::OctetString),
    (232, "UtcTimeOffsetCode", FieldType::Integer),
    (233, "UtcTimeOffsetInfo", FieldType::Group),
    (234, "UtcTimeOffsetInfoList", FieldType::Group),
    (244, "TapDecimalPlaces", FieldType::Integer),
    (245, "NetworkInitPDPContext", FieldType::Integer),
    (250, "DataVolumeIncoming", FieldType::Integer64),
    (251, "DataVolumeOutgoing", FieldType::Integer64),
    (253, "Mdn", FieldType::OctetString),
    (254, "MinChargeableSubscriber", FieldType::Group),
    (255, "CallTypeLevel2", FieldType::Integer),
    (256, "CallTypeLevel3", FieldType::Integer),
    (258, "CallTypeGroup", FieldType::Group),
    (259, "CallTypeLevel1", FieldType::Integer),
    (260, "PDPContextStartTimestamp", FieldType::Group),
    (261, "AccessPointNameNI", FieldType::OctetString),
    (262, "AccessPointNameOI", FieldType::OctetString),
    (279, "DialledDigits", FieldType::OctetString),
    (280, "UserProtocolIndicator", FieldType::Integer),
    (281, "ObjectType", FieldType::Integer),
    (285, "ContentServiceUsedList", FieldType::Group),
    (286, "GsmChargeableSubscriber", FieldType::Group),
    (287, "ChargedPartyIdentifier", FieldType::OctetString),
    (288, "HomeIdentifier", FieldType::OctetString),
    (289, "LocationIdentifier", FieldType::OctetString),
    (290, "EquipmentId", FieldType::OctetString),
    (291, "ContentProviderIdType", FieldType::Integer),
    (292, "ContentProviderIdentifier", FieldType::OctetString),
    (293, "IspIdType", FieldType::Integer),
    (294, "IspIdentifier", FieldType::OctetString),
    (295, "NetworkIdentifier", FieldType::OctetString),
    (297, "LocationService", FieldType::Group),
    (298, "TrackingCustomerInformation", FieldType::Group),
    (299, "TrackingCustomerIdList", FieldType::Group),
    (300, "OrderPlacedTimeStamp", FieldType::Group),
    (301, "RequestedDeliveryTimeStamp", FieldType::Group),
    (302, "ActualDeliveryTimeStamp", FieldType::Group),
    (303, "TransactionStatus", FieldType::Integer),
    (304, "ContentTransactionBasicInfo", FieldType::Group),
    (305, "ChargedPartyIdType", FieldType::Integer),
    (309, "ChargedPartyIdentification", FieldType::Group),
    (310, "ChargedPartyIdList", FieldType::Group),
    (311, "HomeIdType", FieldType::Integer),
    (313, "ChargedPartyHomeIdentification", FieldType::Group),
    (314, "ChargedPartyHomeIdList", FieldType::Group),
    (315, "LocationIdType", FieldType::Integer),
    (320, "ChargedPartyLocation", FieldType::Group),
    (321, "ChargedPartyLocationList", FieldType::Group),
    (322, "EquipmentIdType", FieldType::Integer),
    (323, "ChargedPartyEquipment", FieldType::Group),
    (324, "ChargedPartyInformation", FieldType::Group),
    (327, "ContentProvider", FieldType::Group),
    (328, "ContentProviderIdList", FieldType::Group),
    (329, "InternetServiceProvider", FieldType::Group),
    (330, "InternetServiceProviderIdList", FieldType::Group),
    (331, "NetworkIdType", FieldType::Integer),
    (332, "Network", FieldType::Group),
    (333, "NetworkList", FieldType::Group),
    (334, "ContentProviderName", FieldType::OctetString),
    (335, "ServingPartiesInformation", FieldType::Group),
    (336, "ContentTransactionCode", FieldType::Integer),
    (337, "ContentTransactionType", FieldType::Integer),
    (338, "TransactionDescriptionSupp", FieldType::Integer),
    (339, "TransactionDetailDescription", FieldType::OctetString),
    (340, "TransactionShortDescription", FieldType::OctetString),
    (341, "TransactionIdentifier", FieldType::OctetString),
    (342, "TransactionAuthCode", FieldType::OctetString),
    (343, "TotalDataVolume", FieldType::Integer64),
    (344, "ChargeRefundIndicator", FieldType::Integer),
    (345, "ContentChargingPoint", FieldType::Integer),
    (346, "PaidIndicator", FieldType::Integer),
    (347, "PaymentMethod", FieldType::Integer),
    (348, "AdvisedChargeCurrency", FieldType::Group),
    (349, "AdvisedCharge", FieldType::Group),
    (350, "Commission", FieldType::Group),
    (351, "AdvisedChargeInformation", FieldType::Group),
    (352, "ContentServiceUsed", FieldType::Group),
    (353, "TotalTaxRefund", FieldType::Integer),
    (354, "TotalDiscountRefund", FieldType::Integer),
    (355, "TotalChargeRefund", FieldType::Integer),
    (356, "TotalAdvisedCharge", FieldType::Integer),
    (357, "TotalAdvisedChargeRefund", FieldType::Integer),
    (358, "TotalCommission", FieldType::Integer),
    (359, "TotalCommissionRefund", FieldType::Integer),
    (360, "TotalAdvisedChargeValue", FieldType::Group),
    (361, "TotalAdvisedChargeValueList", FieldType::Group),
    (362, "TrackingCustomerIdentification", FieldType::Group),
    (363, "CustomerIdType", FieldType::Integer),
    (364, "CustomerIdentifier", FieldType::OctetString),
    (365, "TrackingCustomerHomeIdList", FieldType::Group),
    (366, "TrackingCustomerHomeId", FieldType::Group),
    (367, "TrackedCustomerInformation", FieldType::Group),
    (368, "TrackingCustomerLocList", FieldType::Group),
    (369, "TrackingCustomerLocation", FieldType::Group),
    (370, "TrackedCustomerIdList", FieldType::Group),
    (371, "TrackingCustomerEquipment", FieldType::Group),
    (372, "TrackedCustomerIdentification", FieldType::Group),
    (373, "LCSSPInformation", FieldType::Group),
    (374, "LCSSPIdentificationList", FieldType::Group),
    (375, "LCSSPIdentification", FieldType::Group),
    (376, "TrackedCustomerHomeIdList", FieldType::Group),
    (377, "TrackedCustomerHomeId", FieldType::Group),
    (378, "ISPList", FieldType::Group),
    (379, "TrackedCustomerLocList", FieldType::Group),
    (380, "TrackedCustomerLocation", FieldType::Group),
    (381, "TrackedCustomerEquipment", FieldType::Group),
    (382, "LocationServiceUsage", FieldType::Group),
    (383, "LCSQosRequested", FieldType::Group),
    (384, "LCSRequestTimestamp", FieldType::Group),
    (385, "HorizontalAccuracyRequested", FieldType::Integer),
    (386, "VerticalAccuracyRequested", FieldType::Integer),
    (387, "ResponseTimeCategory", FieldType::Integer),
    (388, "TrackingPeriod", FieldType::Integer),
    (389, "TrackingFrequency", FieldType::Integer),
    (390, "LCSQosDelivered", FieldType::Group),
    (391, "LCSTransactionStatus", FieldType::Integer),
    (392, "HorizontalAccuracyDelivered", FieldType::Integer),
    (393, "VerticalAccuracyDelivered", FieldType::Integer),
    (394, "ResponseTime", FieldType::Integer),
    (395, "PositioningMethod", FieldType::Integer),
    (396, "AgeOfLocation", FieldType::Integer),
    (397, "TaxValue", FieldType::Integer),
    (398, "TaxableAmount", FieldType::Integer),
    (400, "RecEntityId", FieldType::OctetString),
    (402, "NonChargedNumber", FieldType::OctetString),
    (403, "ThirdPartyNumber", FieldType::OctetString),
    (404, "CamelDestinationNumber", FieldType::OctetString),
    (405, "CallingNumber", FieldType::Integer),
    (407, "CalledNumber", FieldType::Integer),
    (410, "ChargeDetailTimeStamp", FieldType::Group),
    (411, "FixedDiscountValue", FieldType::Integer),
    (412, "Discount", FieldType::Integer),
    (413, "HomeLocationDescription", FieldType::OctetString),
    (414, "ServingLocationDescription", FieldType::OctetString),
    (415, "TotalCharge", FieldType::Integer),
    (416, "TotalTransactionDuration", FieldType::Integer64),
    (417, "NetworkAccessIdentifier", FieldType::OctetString),
    (418, "IMSSignallingContext", FieldType::Integer),
    (419, "SMSDestinationNumber", FieldType::OctetString),
    (420, "GuaranteedBitRate", FieldType::OctetString),
    (421, "MaximumBitRate", FieldType::OctetString),
    (422, "CamelInvocationFee", FieldType::Integer),
    (423, "DiscountableAmount", FieldType::Integer),
    (424, "HSCSDIndicator", FieldType::OctetString),
    (425, "SMSOriginator", FieldType::OctetString),
    (426, "BasicServiceCode", FieldType::Group),
    (427, "ChargeableSubscriber", FieldType::Group),
    (428, "DiscountApplied", FieldType::Group),
    (429, "ImeiOrEsn", FieldType::Group),
    (430, "ScuChargeableSubscriber", FieldType::Group),
    (431, "ThreeGcamelDestination", FieldType::Group),
];

/// Looks up a BER tag in the dictionary for the given (version, release).
///
/// Returns `None` both when the tag is unrecognised and when the
/// (version, release) pair itself has no populated table; callers that need
/// to distinguish "unknown schema" from "unknown tag" should call
/// [`schema_exists`] first.
pub fn lookup(version: u16, release: u16, tag: u64) -> Option<(&'static str, FieldType)> {
    let table = table_for(version, release)?;
    table
        .binary_search_by_key(&tag, |entry| entry.0)
        .ok()
        .map(|idx| (table[idx].1, table[idx].2))
}

/// Whether a dictionary is populated for the given (version, release).
pub fn schema_exists(version: u16, release: u16) -> bool {
    table_for(version, release).is_some()
}

fn table_for(version: u16, release: u16) -> Option<&'static [Entry]> {
    match (version, release) {
        (3, 11) => Some(TAP_3_11),
        _ => None,
    }
}
