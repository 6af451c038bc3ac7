//! Declared client driver error codes
//!
//! Single source of truth for every failure the driver can raise. Each entry
//! is a `pub const` so callers name identifiers that the compiler checks, and
//! [`DECLARED`] lists them in declaration order for the registry to validate.
//!
//! 200057 is unassigned. Do not reuse it.

use super::descriptor::ErrorDescriptor;
use crate::sql_state::SqlState;

/// Bundle holding the message templates keyed by these codes
pub const MESSAGE_RESOURCE: &str = "driver_error_messages";

macro_rules! error_codes {
    ($($name:ident = ($code:expr, $state:ident);)+) => {
        $(
            pub const $name: ErrorDescriptor =
                ErrorDescriptor::new(stringify!($name), $code, SqlState::$state);
        )+

        /// Every declared entry, in declaration order
        pub const DECLARED: &[ErrorDescriptor] = &[$($name),+];
    };
}

error_codes! {
    INTERNAL_ERROR = (200001, INTERNAL_ERROR);
    CONNECTION_ERROR = (200002, SQLCLIENT_UNABLE_TO_ESTABLISH_SQLCONNECTION);
    INTERRUPTED = (200003, QUERY_CANCELED);
    COMPRESSION_TYPE_NOT_SUPPORTED = (200004, FEATURE_NOT_SUPPORTED);
    QUERY_CANCELED = (200005, QUERY_CANCELED);
    COMPRESSION_TYPE_NOT_KNOWN = (200006, FEATURE_NOT_SUPPORTED);
    FAIL_LIST_FILES = (200007, DATA_EXCEPTION);
    FILE_NOT_FOUND = (200008, DATA_EXCEPTION);
    FILE_IS_DIRECTORY = (200009, DATA_EXCEPTION);
    DUPLICATE_CONNECTION_PROPERTY_SPECIFIED = (200010, DATA_EXCEPTION);
    MISSING_USERNAME = (200011, INVALID_AUTHORIZATION_SPECIFICATION);
    MISSING_PASSWORD = (200012, INVALID_AUTHORIZATION_SPECIFICATION);
    S3_OPERATION_ERROR = (200013, SYSTEM_ERROR);
    MAX_RESULT_LIMIT_EXCEEDED = (200014, PROGRAM_LIMIT_EXCEEDED);
    NETWORK_ERROR = (200015, IO_ERROR);
    IO_ERROR = (200016, IO_ERROR);
    PATH_NOT_DIRECTORY = (200017, DATA_EXCEPTION);
    DATA_TYPE_NOT_SUPPORTED = (200018, FEATURE_NOT_SUPPORTED);
    CLIENT_SIDE_SORTING_NOT_SUPPORTED = (200019, FEATURE_NOT_SUPPORTED);
    AWS_CLIENT_ERROR = (200020, SYSTEM_ERROR);
    INVALID_SQL = (200021, SQL_STATEMENT_NOT_YET_COMPLETE);
    BAD_RESPONSE = (200022, INTERNAL_ERROR);
    ARRAY_BIND_MIXED_TYPES_NOT_SUPPORTED = (200023, FEATURE_NOT_SUPPORTED);
    STATEMENT_CLOSED = (200024, FEATURE_NOT_SUPPORTED);
    STATEMENT_ALREADY_RUNNING_QUERY = (200025, FEATURE_NOT_SUPPORTED);
    MISSING_SERVER_URL = (200026, INVALID_AUTHORIZATION_SPECIFICATION);
    TOO_MANY_SESSION_PARAMETERS = (200027, FEATURE_NOT_SUPPORTED);
    MISSING_CONNECTION_PROPERTY = (200028, INVALID_AUTHORIZATION_SPECIFICATION);
    INVALID_CONNECTION_URL = (200029, INVALID_AUTHORIZATION_SPECIFICATION);
    DUPLICATE_STATEMENT_PARAMETER_SPECIFIED = (200030, DATA_EXCEPTION);
    TOO_MANY_STATEMENT_PARAMETERS = (200031, FEATURE_NOT_SUPPORTED);
    COLUMN_DOES_NOT_EXIST = (200032, DATA_EXCEPTION);
    INVALID_PARAMETER_TYPE = (200033, INVALID_PARAMETER_VALUE);
    ROW_DOES_NOT_EXIST = (200034, DATA_EXCEPTION);
    FEATURE_UNSUPPORTED = (200035, FEATURE_NOT_SUPPORTED);
    INVALID_STATE = (200036, FEATURE_NOT_SUPPORTED);
    RESULTSET_ALREADY_CLOSED = (200037, FEATURE_NOT_SUPPORTED);
    INVALID_VALUE_CONVERT = (200038, FEATURE_NOT_SUPPORTED);
    IDP_CONNECTION_ERROR = (200039, SQLCLIENT_UNABLE_TO_ESTABLISH_SQLCONNECTION);
    IDP_INCORRECT_DESTINATION = (200040, SQLCLIENT_UNABLE_TO_ESTABLISH_SQLCONNECTION);
    CONNECTION_ESTABLISHED_WITH_DIFFERENT_PROP = (200041, WARNING);
    UNSUPPORTED_STATEMENT_TYPE_IN_EXECUTION_API = (200042, FEATURE_NOT_SUPPORTED);
    STATEMENT_PREPARE_FAILURE = (200043, FEATURE_NOT_SUPPORTED);
    AZURE_SERVICE_ERROR = (200044, SYSTEM_ERROR);
    INVALID_OR_UNSUPPORTED_PRIVATE_KEY = (200045, SYNTAX_ERROR);
    FAILED_TO_GENERATE_JWT = (200046, SYNTAX_ERROR);
    INVALID_PARAMETER_VALUE = (200047, INVALID_PARAMETER_VALUE);
    QUERY_FIRST_RESULT_NOT_RESULT_SET = (200048, WARNING);
    UPDATE_FIRST_RESULT_NOT_UPDATE_COUNT = (200049, WARNING);
    CHILD_RESULT_IDS_AND_TYPES_DIFFERENT_SIZES = (200050, INTERNAL_ERROR);
    INVALID_PROXY_PROPERTIES = (200051, CONNECTION_EXCEPTION);
    CONNECTION_CLOSED = (200052, CONNECTION_DOES_NOT_EXIST);
    NON_FATAL_ERROR = (200053, WARNING);
    NUMERIC_VALUE_OUT_OF_RANGE = (200054, NUMERIC_VALUE_OUT_OF_RANGE);
    NO_VALID_DATA = (200055, NO_DATA);
    INVALID_APP_NAME = (200056, INVALID_PARAMETER_VALUE);
    EXECUTE_BATCH_INTEGER_OVERFLOW = (200058, NUMERIC_VALUE_OUT_OF_RANGE);
    INVALID_CONNECT_STRING = (200059, CONNECTION_EXCEPTION);
    INVALID_OKTA_USERNAME = (200060, CONNECTION_EXCEPTION);
    GCP_SERVICE_ERROR = (200061, SYSTEM_ERROR);
    AUTHENTICATOR_REQUEST_TIMEOUT = (200062, CONNECTION_EXCEPTION);
    INVALID_STRUCT_DATA = (200063, DATA_EXCEPTION);
    DISABLEOCSP_INSECUREMODE_VALUE_MISMATCH = (200064, INVALID_PARAMETER_VALUE);
    TOO_MANY_FILES_TO_DOWNLOAD_AS_STREAM = (200065, DATA_EXCEPTION);
}
