mod graphql_request_tests;
