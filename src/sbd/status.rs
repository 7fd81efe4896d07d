//! # Modem Status Codes
//!
//! Maps the 16-bit modem status code from the payload's trailing byte
//! pair to a human-readable description.
//!
//! The codes fall into four bands: 0-65 are Iridium SBD session results
//! (the `+SBDIX` MO status values), 100-299 are ground-station failure
//! codes, 300-399 are status/progress codes, and 400-407 are success
//! codes. Descriptions are carried verbatim from the ground-station
//! software for compatibility.

/// Codes 3-4: reserved, MO session succeeded
const RESERVED_MO_SUCCESS: &str = "Reserved – indicates MO session success.";

/// Codes 5-8: reserved, MO session failed
const RESERVED_MO_FAILURE: &str = "Reserved – indicates MO session failure.";

/// Codes 20-31 and 39-63: reserved failure codes
const RESERVED_FAILURE: &str = "Reserved return code indicating failure.";

/// Fallback for any code not in the table
const UNKNOWN_STATUS: &str = "Unknown or unhandled status code.";

/// Known status codes, sorted by code for binary search
///
/// Reserved ranges are handled by [`describe`] and deliberately absent
/// here.
static DESCRIPTIONS: &[(u16, &str)] = &[
    // -- MO message return codes (0-65) --
    (0, "MO message transferred successfully."),
    (1, "MO message transferred successfully, but MT message in the queue was too big."),
    (2, "MO message transferred successfully, but Location Update was not accepted."),
    (10, "GSS reported that the call did not complete in the allowed time."),
    (11, "MO message queue at the GSS is full."),
    (12, "MO message has too many segments."),
    (13, "GSS reported that the session did not complete."),
    (14, "Invalid segment size."),
    (15, "Access is denied."),
    (16, "ISU has been locked and may not make SBD calls (see +CULK command)."),
    (17, "Gateway not responding (local session timeout)."),
    (18, "Connection lost (RF drop)."),
    (19, "Link failure (protocol error caused termination of the call)."),
    (32, "No network service, unable to initiate call."),
    (33, "Antenna fault, unable to initiate call."),
    (34, "Radio is disabled, unable to initiate call (see *Rn command)."),
    (35, "ISU is busy, unable to initiate call."),
    (36, "Try later, must wait 3 minutes since last registration."),
    (37, "SBD service is temporarily disabled."),
    (38, "Try later, traffic management period (see +SBDLOE command)."),
    (64, "Band violation (attempt to transmit outside permitted frequency band)."),
    (65, "PLL lock failure hardware error during attempted transmit."),
    // -- Failure return codes (100-299) --
    (100, "FailureAfterSBDIX_UInt"),
    (101, "ModemStatus_TimedOutUInt"),
    (104, "UnexpectedMO_StatusValueUInt"),
    (105, "UnexpectedMOMSN_ValueUInt"),
    (106, "UnexpectedMT_StatusValueUInt"),
    (107, "UnexpectedMTMSN_StatusValueUInt"),
    (108, "UnexpectedMT_SBD_MessageLengthUInt"),
    (109, "UnexpectedMT_SBD_MessageQueuedValueUInt"),
    (112, "ModemFailureAfterSBDIX_UInt"),
    (113, "UnexpectedResponseToSBDIXUInt"),
    (114, "TimeOutAfterSBDIX_UInt"),
    (116, "TimeOutAfterSendingMessageSizeUInt"),
    (118, "MO_BufferClearedErrorResponseUInt"),
    (119, "MO_BufferClearedTimeOutUInt"),
    (120, "InvalidCommand"),
    (200, "MO_BufferClearedUnexpectedResponseUInt"),
    (202, "MT_BufferClearedErrorResponseUInt"),
    (203, "MT_BufferClearedTimeOutUInt"),
    (204, "MT_BufferClearedUnexpectedResponseUInt"),
    (206, "DisableFlowControlRequestTimedOutUInt"),
    (207, "DisableFlowControlRequestUnexpectedResponseUInt"),
    (208, "DisableSBD_RingSetupFailedDueToTimeOutUInt"),
    (209, "DisableSBD_RingSetupFailedDueToUnexpectedResponseUInt"),
    (231, "RingIndicationErrononiouslyEnabledUInt"),
    (232, "TimeOutAfterGetResponseFromVerifyDisableMT_AlertUInt"),
    (233, "UnexpectedResponseToSBDMTAUInt"),
    (234, "UnexpectedResponseAfterSendingMessageSizeUInt"),
    (236, "SetupFailedDueToTimeOutUInt"),
    (237, "SetupFailedDueToUnexpectedResponseUInt"),
    (238, "NetworkStatusUnexpectedResponseUInt"),
    (239, "TimeOutNetworkStatusUInt"),
    (240, "NetworkNotAvailableUInt"),
    (242, "MT_MessageUnexpectedResponseUInt"),
    (243, "MT_MessageTimeOutUInt"),
    (244, "MT_MessageFailedCheckSumUInt"),
    (245, "MT_MessageTooLongUInt"),
    (249, "ModemSetupFailedDueToTimeOutUInt"),
    (250, "NoModemConnectedUInt"),
    (251, "UnexpectedModemConnectedUInt"),
    (255, "DuplicateTransmitOfDataAttemptedUInt"),
    (256, "YouAreAskingToTransmitTooSoonSoTryLaterUInt"),
    (257, "FlowControlSetupFailedDueToTimeOutUInt"),
    (258, "FlowControlSetupFailedDueToUnexpectedResponseUInt"),
    (259, "StoreConfigurationFailedDueToTimeOutUInt"),
    (260, "StoreConfigurationFailedDueToUnexpectedResponseUInt"),
    (261, "SelectProfileFailedDueToTimeOutUInt"),
    (262, "SelectProfileFailedDueToUnexpectedResponseUInt"),
    (263, "RingIndicationUnexpectedResponseUInt"),
    (264, "OK_SearchTimedOutUInt"),
    (265, "OK_UnexpectedResponseUInt"),
    (269, "SignalStrengthTooLowUInt"),
    (272, "TransmitSuccessfulButReceiveFailedUInt"),
    (273, "UnexpectedFDR_CommandUInt"),
    (274, "MPM_Busy_TransmitCommandRejectedUInt"),
    (275, "PingToMPM_TimedOutUInt"),
    (276, "PingToMPM_SuccessButToModemFailedUInt"),
    (278, "InitialSetupModemStatusValueUInt"),
    (279, "TimeOutWaitingForgetReceivedDataUInt"),
    (280, "NoPingMPM_BusyUInt"),
    (281, "ModemFailedAtSetupUInt"),
    (282, "UnexpectedResponseFromModemDuringSetupUInt"),
    (283, "ModemSetupFailedBecauseMPM_BusyUInt"),
    (284, "ModemFailedAtSetupTimeOutUInt"),
    (285, "MPM_BusyWhenFDR_AskedForSetupUInt"),
    (286, "MPM_DidNotRespondToRequestForDataUInt"),
    (287, "SoftwareError1UInt"),
    (288, "MPM_BusyUInt"),
    (289, "AskedForPingResultTooSoon_DoPingAgainUInt"),
    (290, "PingToMPM_DidNotRespondUInt"),
    (291, "WrongModemConnectedCheckSerialNumberUInt"),
    (292, "RequestedTransmitTooSoonUInt"),
    (293, "NoFunctioningModemPresentUInt"),
    (294, "TimeOutAfterSendingMessageUInt"),
    (295, "SBD_MessageTimeOutByModemUInt"),
    (296, "SBD_MessageChecksumWrongUInt"),
    (297, "SBD_MessageSizeWrongUInt"),
    (298, "UnexpectedResponseAfterWritingDataToMobileOriginatedBufferUInt"),
    (299, "SBD_MessageSizeTooBigOrTooSmallUInt"),
    // -- Status return codes (300-399) --
    (300, "SuccessByteAfterSBDIX_UInt"),
    (301, "MessageSizeAcceptedUInt"),
    (302, "MO_BufferClearedSuccessfullyUInt"),
    (303, "MT_BufferClearedSuccessfullyUInt"),
    (304, "OK_FoundUInt"),
    (305, "RingIndicationDisabledUInt"),
    (306, "SetupSuccessfulUInt"),
    (307, "MT_MessageRetrievedCorrectlyUInt"),
    (308, "MT_MessageIsNullUInt"),
    (309, "ModemSetupSuccessfulUInt"),
    (310, "CorrectModemConnectedUInt"),
    (311, "idleUInt"),
    (313, "NetworkAvailableWithAcceptableSignalStrengthUInt"),
    (314, "VerifyDisableMT_AlertUInt"),
    (315, "FlushedUART_BufferUInt"),
    (316, "ArraySentToModemUInt"),
    (317, "InitiateTransmitAndReceiveUInt"),
    (318, "TellModemToClearMO_BufferUInt"),
    (319, "TellModemToClearMT_BufferUInt"),
    (320, "ToldModemToGiveUsTheReceivedMessageUInt"),
    (322, "TransmissionProcessHasBegunUInt"),
    (323, "SentPerformTransmitUInt"),
    (324, "SentgetReceivedDataUInt"),
    (326, "AboutToStartTransmitProcessUInt"),
    (327, "WaitingForOK_FromModemUInt"),
    (328, "InitialReturnCodeValueUInt"),
    (329, "InitialMPM_ResponseValueUInt"),
    (330, "BusySettingUpModemUInt"),
    (331, "PerformingPingUInt"),
    (333, "PingNotRunningUInt"),
    (334, "MPM_Busy_TransmitCommandPendingUInt"),
    (335, "ModemSetupProceedingUInt"),
    (336, "ModemDefaultsSetUInt"),
    (337, "SentPingUInt"),
    (338, "SBD_MessageSuccessfullyWrittenUInt"),
    (339, "MT_MessagePendingUInt"),
    (340, "MT_MessagesPendingUInt"),
    // -- Success return codes (400-407) --
    (400, "PingThroughMPM_AndModemSuccessUInt"),
    (401, "ModemReadyForUseUInt"),
    (402, "TransmitSuccessfulAndNoReceiveUInt"),
    (403, "TransmitAndReceiveSuccessfulUInt"),
    (404, "TransmitAndReceiveSuccessfulPlusReceivePendingUInt"),
    (405, "dataLoopAroundEnabledUInt"),
    (406, "dataLooopAroundDisabledUInt"),
    (407, "receiveDataPlacedInReceiveArrayUint"),
];

/// Look up the human-readable description for a modem status code
///
/// Reserved sub-ranges share a single message each; any code absent from
/// the table resolves to a generic unknown-status description.
pub fn describe(code: u16) -> &'static str {
    match code {
        3..=4 => RESERVED_MO_SUCCESS,
        5..=8 => RESERVED_MO_FAILURE,
        20..=31 | 39..=63 => RESERVED_FAILURE,
        _ => DESCRIPTIONS
            .binary_search_by_key(&code, |&(c, _)| c)
            .map(|i| DESCRIPTIONS[i].1)
            .unwrap_or(UNKNOWN_STATUS),
    }
}
